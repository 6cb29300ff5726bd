use sea_orm::DatabaseConnection;

use crate::server::{
    data::{category::CategoryRepository, event::EventRepository},
    error::AppError,
    model::category::Category,
    service::user::unique_violation,
};

pub struct CategoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a category. Names are unique.
    pub async fn create(&self, name: String) -> Result<Category, AppError> {
        let category = CategoryRepository::new(self.db)
            .create(name.clone())
            .await
            .map_err(|err| unique_violation(err, || format!("Category {} already exists", name)))?;

        tracing::info!("Created category {} ({})", category.id, category.name);

        Ok(Category::from_entity(category))
    }

    /// Renames a category.
    ///
    /// # Returns
    /// - `Ok(Category)` - The renamed category
    /// - `Err(AppError::NotFound)` - No category with that ID
    /// - `Err(AppError::Conflict)` - Another category has that name
    pub async fn update(&self, id: i32, name: String) -> Result<Category, AppError> {
        let repo = CategoryRepository::new(self.db);

        repo.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Category with id={} was not found", id)))?;

        let category = repo
            .update(id, name.clone())
            .await
            .map_err(|err| unique_violation(err, || format!("Category {} already exists", name)))?;

        tracing::info!("Renamed category {} to {}", category.id, category.name);

        Ok(Category::from_entity(category))
    }

    /// Deletes a category no event belongs to.
    ///
    /// # Returns
    /// - `Ok(())` - Category deleted
    /// - `Err(AppError::NotFound)` - No category with that ID
    /// - `Err(AppError::Conflict)` - Events still use the category
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if EventRepository::new(self.db).exists_for_category(id).await? {
            return Err(AppError::Conflict(format!(
                "Category with id={} still has events",
                id
            )));
        }

        let deleted = CategoryRepository::new(self.db).delete(id).await?;
        if deleted == 0 {
            return Err(AppError::NotFound(format!(
                "Category with id={} was not found",
                id
            )));
        }

        tracing::info!("Deleted category {}", id);

        Ok(())
    }

    /// Gets a category by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Category, AppError> {
        CategoryRepository::new(self.db)
            .find_by_id(id)
            .await?
            .map(Category::from_entity)
            .ok_or_else(|| AppError::NotFound(format!("Category with id={} was not found", id)))
    }

    pub async fn get_all(&self) -> Result<Vec<Category>, AppError> {
        let categories = CategoryRepository::new(self.db).find_all().await?;

        Ok(categories.into_iter().map(Category::from_entity).collect())
    }
}

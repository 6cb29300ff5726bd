use sea_orm::entity::prelude::*;

/// Membership of an event in a compilation.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "compilation_event")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub compilation_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub event_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::compilation::Entity",
        from = "Column::CompilationId",
        to = "super::compilation::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Compilation,
    #[sea_orm(
        belongs_to = "super::event::Entity",
        from = "Column::EventId",
        to = "super::event::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Event,
}

impl Related<super::compilation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Compilation.def()
    }
}

impl Related<super::event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Event.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

use sea_orm::entity::prelude::*;

/// Event row. `participant_limit`, `request_moderation` and `confirmed_requests`
/// together form the capacity ledger consulted by request admission.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "event")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub annotation: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub category_id: i32,
    pub initiator_id: i32,
    pub event_date: DateTimeUtc,
    pub created_on: DateTimeUtc,
    pub published_on: Option<DateTimeUtc>,
    pub paid: bool,
    pub participant_limit: i32,
    pub request_moderation: bool,
    pub confirmed_requests: i32,
    /// One of `PENDING`, `PUBLISHED`, `CANCELED`.
    pub state: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Category,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::InitiatorId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(has_many = "super::participation_request::Entity")]
    ParticipationRequest,
    #[sea_orm(has_many = "super::compilation_event::Entity")]
    CompilationEvent,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::participation_request::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ParticipationRequest.def()
    }
}

impl Related<super::compilation::Entity> for Entity {
    fn to() -> RelationDef {
        super::compilation_event::Relation::Compilation.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::compilation_event::Relation::Event.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

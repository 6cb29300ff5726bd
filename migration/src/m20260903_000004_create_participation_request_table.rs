use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260901_000001_create_user_table::User, m20260902_000003_create_event_table::Event,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ParticipationRequest::Table)
                    .if_not_exists()
                    .col(pk_auto(ParticipationRequest::Id))
                    .col(integer(ParticipationRequest::RequesterId))
                    .col(integer(ParticipationRequest::EventId))
                    .col(
                        timestamp(ParticipationRequest::Created)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(string_len(ParticipationRequest::Status, 16))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_participation_request_requester_id")
                            .from(ParticipationRequest::Table, ParticipationRequest::RequesterId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_participation_request_event_id")
                            .from(ParticipationRequest::Table, ParticipationRequest::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Bulk updates re-read requests by (event, status)
        manager
            .create_index(
                Index::create()
                    .name("idx_participation_request_event_status")
                    .table(ParticipationRequest::Table)
                    .col(ParticipationRequest::EventId)
                    .col(ParticipationRequest::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ParticipationRequest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ParticipationRequest {
    Table,
    Id,
    RequesterId,
    EventId,
    Created,
    Status,
}

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CitizensMlas::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(CitizensMlas::CitizenId).string().not_null())
                    .col(ColumnDef::new(CitizensMlas::MlaId).string().not_null())
                    .primary_key(
                        Index::create()
                            .name("pk_citizens_mlas")
                            .col(CitizensMlas::CitizenId)
                            .col(CitizensMlas::MlaId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_citizens_mlas_citizen_id")
                            .from(CitizensMlas::Table, CitizensMlas::CitizenId)
                            .to(Citizens::Table, Citizens::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_citizens_mlas_mla_id")
                            .from(CitizensMlas::Table, CitizensMlas::MlaId)
                            .to(Mlas::Table, Mlas::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_citizens_mlas_mla_id")
                    .table(CitizensMlas::Table)
                    .col(CitizensMlas::MlaId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CitizensOrganizations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CitizensOrganizations::CitizenId)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CitizensOrganizations::OrganizationId)
                            .string()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .name("pk_citizens_organizations")
                            .col(CitizensOrganizations::CitizenId)
                            .col(CitizensOrganizations::OrganizationId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_citizens_organizations_citizen_id")
                            .from(CitizensOrganizations::Table, CitizensOrganizations::CitizenId)
                            .to(Citizens::Table, Citizens::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_citizens_organizations_org_id")
                            .from(
                                CitizensOrganizations::Table,
                                CitizensOrganizations::OrganizationId,
                            )
                            .to(Organizations::Table, Organizations::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_citizens_organizations_org_id")
                    .table(CitizensOrganizations::Table)
                    .col(CitizensOrganizations::OrganizationId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Issues::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Issues::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Issues::Title).string().not_null())
                    .col(ColumnDef::new(Issues::Description).text().not_null())
                    .col(ColumnDef::new(Issues::Category).string().not_null())
                    .col(ColumnDef::new(Issues::Severity).string().not_null())
                    .col(
                        ColumnDef::new(Issues::Status)
                            .string()
                            .not_null()
                            .default("PENDING"),
                    )
                    .col(ColumnDef::new(Issues::Location).string().not_null())
                    .col(ColumnDef::new(Issues::Latitude).double())
                    .col(ColumnDef::new(Issues::Longitude).double())
                    .col(ColumnDef::new(Issues::MediaUrl).text())
                    .col(ColumnDef::new(Issues::CitizenId).string().not_null())
                    .col(ColumnDef::new(Issues::MlaId).string())
                    .col(ColumnDef::new(Issues::OrganizationId).string())
                    .col(ColumnDef::new(Issues::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Issues::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_issues_citizen_id")
                            .from(Issues::Table, Issues::CitizenId)
                            .to(Citizens::Table, Citizens::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_issues_mla_id")
                            .from(Issues::Table, Issues::MlaId)
                            .to(Mlas::Table, Mlas::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_issues_organization_id")
                            .from(Issues::Table, Issues::OrganizationId)
                            .to(Organizations::Table, Organizations::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_issues_citizen_id")
                    .table(Issues::Table)
                    .col(Issues::CitizenId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_issues_mla_id")
                    .table(Issues::Table)
                    .col(Issues::MlaId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Issues::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(CitizensOrganizations::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(CitizensMlas::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Citizens {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Mlas {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Organizations {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum CitizensMlas {
    Table,
    CitizenId,
    MlaId,
}

#[derive(DeriveIden)]
enum CitizensOrganizations {
    Table,
    CitizenId,
    OrganizationId,
}

#[derive(DeriveIden)]
enum Issues {
    Table,
    Id,
    Title,
    Description,
    Category,
    Severity,
    Status,
    Location,
    Latitude,
    Longitude,
    MediaUrl,
    CitizenId,
    MlaId,
    OrganizationId,
    CreatedAt,
    UpdatedAt,
}

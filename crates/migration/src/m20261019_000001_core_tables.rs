use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Citizens::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Citizens::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Citizens::Name).string().not_null())
                    .col(ColumnDef::new(Citizens::Email).string().not_null().unique_key())
                    .col(ColumnDef::new(Citizens::Password).string().not_null())
                    .col(ColumnDef::new(Citizens::Constituency).string().not_null())
                    .col(ColumnDef::new(Citizens::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Citizens::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Mlas::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Mlas::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Mlas::Name).string().not_null())
                    .col(ColumnDef::new(Mlas::Email).string().not_null().unique_key())
                    .col(ColumnDef::new(Mlas::Constituency).string().not_null())
                    .col(ColumnDef::new(Mlas::Party).string())
                    .col(ColumnDef::new(Mlas::Phone).string())
                    .col(ColumnDef::new(Mlas::Image).text())
                    .col(ColumnDef::new(Mlas::Rating).double())
                    .col(ColumnDef::new(Mlas::CriminalCasesCount).integer())
                    .col(ColumnDef::new(Mlas::Education).string())
                    .col(ColumnDef::new(Mlas::TotalAssetsInRupees).big_integer())
                    .col(ColumnDef::new(Mlas::LiabilitiesInRupees).big_integer())
                    .col(ColumnDef::new(Mlas::ElectionYear).integer())
                    .col(ColumnDef::new(Mlas::DataSource).string())
                    .col(ColumnDef::new(Mlas::MockHistory).text())
                    .col(
                        ColumnDef::new(Mlas::TotalComplaints)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Mlas::ResolvedComplaints)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Mlas::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Mlas::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // Signup links citizens by constituency.
        manager
            .create_index(
                Index::create()
                    .name("idx_mlas_constituency")
                    .table(Mlas::Table)
                    .col(Mlas::Constituency)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Organizations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Organizations::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Organizations::Name).string().not_null())
                    .col(
                        ColumnDef::new(Organizations::Category)
                            .string()
                            .not_null()
                            .default("General"),
                    )
                    .col(
                        ColumnDef::new(Organizations::ContactEmail)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Organizations::ContactPhone).string())
                    .col(ColumnDef::new(Organizations::Address).text())
                    .col(ColumnDef::new(Organizations::Constituency).string().not_null())
                    .col(
                        ColumnDef::new(Organizations::TotalComplaints)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Organizations::ResolvedComplaints)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Organizations::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Organizations::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_organizations_constituency")
                    .table(Organizations::Table)
                    .col(Organizations::Constituency)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Accounts::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Accounts::Email).string().not_null().primary_key())
                    .col(ColumnDef::new(Accounts::Kind).string_len(16).not_null())
                    .col(ColumnDef::new(Accounts::SubjectId).string().not_null())
                    .col(ColumnDef::new(Accounts::CreatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Accounts::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Organizations::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Mlas::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Citizens::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Citizens {
    Table,
    Id,
    Name,
    Email,
    Password,
    Constituency,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Mlas {
    Table,
    Id,
    Name,
    Email,
    Constituency,
    Party,
    Phone,
    Image,
    Rating,
    CriminalCasesCount,
    Education,
    TotalAssetsInRupees,
    LiabilitiesInRupees,
    ElectionYear,
    DataSource,
    MockHistory,
    TotalComplaints,
    ResolvedComplaints,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Organizations {
    Table,
    Id,
    Name,
    Category,
    ContactEmail,
    ContactPhone,
    Address,
    Constituency,
    TotalComplaints,
    ResolvedComplaints,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Accounts {
    Table,
    Email,
    Kind,
    SubjectId,
    CreatedAt,
}

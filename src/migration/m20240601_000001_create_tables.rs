use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Users::FirstName).string().not_null())
                    .col(ColumnDef::new(Users::LastName).string().not_null())
                    .col(ColumnDef::new(Users::Age).integer().not_null())
                    .col(ColumnDef::new(Users::Email).string().not_null())
                    .col(ColumnDef::new(Users::Role).string().not_null())
                    .col(ColumnDef::new(Users::Phone).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Orders::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Orders::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Orders::Name).string())
                    .col(ColumnDef::new(Orders::Description).string())
                    .col(ColumnDef::new(Orders::StartDate).string())
                    .col(ColumnDef::new(Orders::EndDate).string())
                    .col(ColumnDef::new(Orders::Address).string())
                    .col(ColumnDef::new(Orders::Price).big_integer())
                    .col(ColumnDef::new(Orders::CustomerId).integer())
                    .col(ColumnDef::new(Orders::ExecutorId).integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_orders_customer")
                            .from(Orders::Table, Orders::CustomerId)
                            .to(Users::Table, Users::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_orders_executor")
                            .from(Orders::Table, Orders::ExecutorId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Offers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Offers::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Offers::OrderId).integer())
                    .col(ColumnDef::new(Offers::ExecutorId).integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_offers_order")
                            .from(Offers::Table, Offers::OrderId)
                            .to(Orders::Table, Orders::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_offers_executor")
                            .from(Offers::Table, Offers::ExecutorId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Offers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Orders::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    FirstName,
    LastName,
    Age,
    Email,
    Role,
    Phone,
}

#[derive(DeriveIden)]
enum Orders {
    Table,
    Id,
    Name,
    Description,
    StartDate,
    EndDate,
    Address,
    Price,
    CustomerId,
    ExecutorId,
}

#[derive(DeriveIden)]
enum Offers {
    Table,
    Id,
    OrderId,
    ExecutorId,
}

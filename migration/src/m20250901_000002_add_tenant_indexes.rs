use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
enum Customers {
    Table,
    RestaurantId,
    Email,
}

#[derive(DeriveIden)]
enum MenuItems {
    Table,
    RestaurantId,
}

#[derive(DeriveIden)]
enum Orders {
    Table,
    RestaurantId,
    CustomerId,
}

#[derive(DeriveIden)]
enum Payments {
    Table,
    RestaurantId,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // A customer email is unique within a restaurant, not globally
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uq_customers_restaurant_email")
                    .table(Customers::Table)
                    .col(Customers::RestaurantId)
                    .col(Customers::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_menu_items_restaurant_id")
                    .table(MenuItems::Table)
                    .col(MenuItems::RestaurantId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_orders_restaurant_id")
                    .table(Orders::Table)
                    .col(Orders::RestaurantId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_orders_customer_id")
                    .table(Orders::Table)
                    .col(Orders::CustomerId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_payments_restaurant_id")
                    .table(Payments::Table)
                    .col(Payments::RestaurantId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("uq_customers_restaurant_email")
                    .table(Customers::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_menu_items_restaurant_id")
                    .table(MenuItems::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_orders_restaurant_id")
                    .table(Orders::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_orders_customer_id")
                    .table(Orders::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_payments_restaurant_id")
                    .table(Payments::Table)
                    .to_owned(),
            )
            .await?;
        Ok(())
    }
}

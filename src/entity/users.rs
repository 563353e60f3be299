use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub email: String,
    pub role: String,
    pub phone: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::offers::Entity")]
    Offers,
}

impl Related<super::offers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Offers.def()
    }
}

/// Orders in which the user is the customer.
pub struct CustomerOrders;

impl Linked for CustomerOrders {
    type FromEntity = Entity;
    type ToEntity = super::orders::Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![super::orders::Relation::Customer.def().rev()]
    }
}

/// Orders in which the user is the executor.
pub struct ExecutorOrders;

impl Linked for ExecutorOrders {
    type FromEntity = Entity;
    type ToEntity = super::orders::Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![super::orders::Relation::Executor.def().rev()]
    }
}

impl ActiveModelBehavior for ActiveModel {}

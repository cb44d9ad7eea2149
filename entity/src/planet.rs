use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "planets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub diameter: String,
    pub rotation_period: String,
    pub orbital_period: String,
    pub gravity: String,
    pub population: String,
    pub climate: String,
    pub terrain: String,
    pub surface_water: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::people::Entity")]
    People,
    #[sea_orm(has_many = "super::user_favorite_planet::Entity")]
    UserFavoritePlanet,
}

impl Related<super::people::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::People.def()
    }
}

impl Related<super::user_favorite_planet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserFavoritePlanet.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

use chrono::{NaiveDateTime, TimeZone, Utc};
use cookbook_core::Recipe;
use diesel::prelude::*;

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::recipes)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct RecipeRow {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    /// Stored as naive UTC.
    pub created_at: NaiveDateTime,
}

impl From<RecipeRow> for Recipe {
    fn from(row: RecipeRow) -> Self {
        Recipe {
            id: row.id,
            title: row.title,
            description: row.description,
            created_at: Utc.from_utc_datetime(&row.created_at),
        }
    }
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::recipes)]
pub struct NewRecipeRow<'a> {
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub created_at: NaiveDateTime,
}

//! 馆藏图书实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "library_books")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    pub author: String,
    #[sea_orm(unique)]
    pub isbn: String,
    pub category: String,
    pub publisher: String,
    pub publication_year: i32,
    pub pages: i32,
    pub status: String,
    pub added_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::book_loans::Entity")]
    BookLoans,
}

impl Related<super::book_loans::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BookLoans.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_book(self) -> crate::models::library::entities::LibraryBook {
        use crate::models::library::entities::{BookStatus, LibraryBook};
        use chrono::{DateTime, Utc};

        LibraryBook {
            id: self.id,
            title: self.title,
            author: self.author,
            isbn: self.isbn,
            category: self.category,
            publisher: self.publisher,
            publication_year: self.publication_year,
            pages: self.pages,
            status: self
                .status
                .parse::<BookStatus>()
                .unwrap_or(BookStatus::Available),
            added_at: DateTime::<Utc>::from_timestamp(self.added_at, 0).unwrap_or_default(),
        }
    }
}

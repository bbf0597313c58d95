//! 借阅记录实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "book_loans")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub book_id: i64,
    pub borrower_id: i64,
    pub borrow_date: String,
    pub due_date: String,
    pub return_date: Option<String>,
    pub fine_amount: i64,
    pub is_returned: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::library_books::Entity",
        from = "Column::BookId",
        to = "super::library_books::Column::Id"
    )]
    LibraryBooks,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::BorrowerId",
        to = "super::users::Column::Id"
    )]
    Users,
}

impl Related<super::library_books::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LibraryBooks.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_loan(self) -> crate::models::library::entities::BookLoan {
        use crate::models::library::entities::BookLoan;
        use chrono::NaiveDate;

        BookLoan {
            id: self.id,
            book_id: self.book_id,
            borrower_id: self.borrower_id,
            borrow_date: NaiveDate::parse_from_str(&self.borrow_date, "%Y-%m-%d")
                .unwrap_or_default(),
            due_date: NaiveDate::parse_from_str(&self.due_date, "%Y-%m-%d").unwrap_or_default(),
            return_date: self
                .return_date
                .and_then(|d| NaiveDate::parse_from_str(&d, "%Y-%m-%d").ok()),
            fine_amount: self.fine_amount,
            is_returned: self.is_returned,
        }
    }
}

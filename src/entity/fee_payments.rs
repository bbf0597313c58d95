//! 缴费单实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "fee_payments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub amount: i64,
    pub due_date: String,
    pub payment_date: Option<String>,
    pub status: String,
    pub payment_method: Option<String>,
    pub transaction_id: Option<String>,
    pub notes: Option<String>,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::student_profiles::Entity",
        from = "Column::StudentId",
        to = "super::student_profiles::Column::Id"
    )]
    StudentProfiles,
}

impl Related<super::student_profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentProfiles.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_fee_payment(self) -> crate::models::fees::entities::FeePayment {
        use crate::models::fees::entities::{FeePayment, PaymentStatus};
        use chrono::{DateTime, NaiveDate, Utc};

        FeePayment {
            id: self.id,
            student_profile_id: self.student_id,
            amount: self.amount,
            due_date: NaiveDate::parse_from_str(&self.due_date, "%Y-%m-%d").unwrap_or_default(),
            payment_date: self
                .payment_date
                .and_then(|d| NaiveDate::parse_from_str(&d, "%Y-%m-%d").ok()),
            status: self
                .status
                .parse::<PaymentStatus>()
                .unwrap_or(PaymentStatus::Pending),
            payment_method: self.payment_method,
            transaction_id: self.transaction_id,
            notes: self.notes,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}

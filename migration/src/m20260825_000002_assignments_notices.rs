use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建作业表
        manager
            .create_table(
                Table::create()
                    .table(Assignments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Assignments::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Assignments::Title).string().not_null())
                    .col(ColumnDef::new(Assignments::Description).text().null())
                    .col(ColumnDef::new(Assignments::Subject).string().not_null())
                    .col(ColumnDef::new(Assignments::ClassName).string().not_null())
                    .col(ColumnDef::new(Assignments::DueDate).big_integer().not_null())
                    .col(ColumnDef::new(Assignments::MaxMarks).integer().not_null())
                    .col(
                        ColumnDef::new(Assignments::CreatedBy)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Assignments::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Assignments::Table, Assignments::CreatedBy)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建作业提交表
        manager
            .create_table(
                Table::create()
                    .table(AssignmentSubmissions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AssignmentSubmissions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AssignmentSubmissions::AssignmentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AssignmentSubmissions::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AssignmentSubmissions::Content)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AssignmentSubmissions::SubmittedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AssignmentSubmissions::MarksObtained)
                            .integer()
                            .null(),
                    )
                    .col(ColumnDef::new(AssignmentSubmissions::Grade).string().null())
                    .col(
                        ColumnDef::new(AssignmentSubmissions::Feedback)
                            .text()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                AssignmentSubmissions::Table,
                                AssignmentSubmissions::AssignmentId,
                            )
                            .to(Assignments::Table, Assignments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                AssignmentSubmissions::Table,
                                AssignmentSubmissions::StudentId,
                            )
                            .to(StudentProfiles::Table, StudentProfiles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 一份作业每个学生至多一次提交，重交覆盖
        manager
            .create_index(
                Index::create()
                    .name("idx_assignment_submissions_assignment_student")
                    .table(AssignmentSubmissions::Table)
                    .col(AssignmentSubmissions::AssignmentId)
                    .col(AssignmentSubmissions::StudentId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 创建公告板表
        manager
            .create_table(
                Table::create()
                    .table(Notices::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Notices::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Notices::AuthorId).big_integer().not_null())
                    .col(ColumnDef::new(Notices::AuthorName).string().not_null())
                    .col(ColumnDef::new(Notices::Message).string().not_null())
                    .col(ColumnDef::new(Notices::CreatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Notices::Table, Notices::AuthorId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Notices::Table).to_owned())
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(AssignmentSubmissions::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(Assignments::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Assignments {
    Table,
    Id,
    Title,
    Description,
    Subject,
    ClassName,
    DueDate,
    MaxMarks,
    CreatedBy,
    CreatedAt,
}

#[derive(DeriveIden)]
enum AssignmentSubmissions {
    Table,
    Id,
    AssignmentId,
    StudentId,
    Content,
    SubmittedAt,
    MarksObtained,
    Grade,
    Feedback,
}

#[derive(DeriveIden)]
enum Notices {
    Table,
    Id,
    AuthorId,
    AuthorName,
    Message,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum StudentProfiles {
    Table,
    Id,
}

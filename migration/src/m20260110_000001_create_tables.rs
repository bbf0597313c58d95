use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建用户表
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Username)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Users::Role).string().not_null())
                    .col(ColumnDef::new(Users::Status).string().not_null())
                    .col(ColumnDef::new(Users::ProfileName).string().null())
                    .col(ColumnDef::new(Users::Mobile).string().null())
                    .col(ColumnDef::new(Users::LastLogin).big_integer().null())
                    .col(ColumnDef::new(Users::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Users::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建学生档案表
        manager
            .create_table(
                Table::create()
                    .table(StudentProfiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StudentProfiles::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(StudentProfiles::UserId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(StudentProfiles::Roll).integer().not_null())
                    .col(
                        ColumnDef::new(StudentProfiles::ClassName)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(StudentProfiles::Fee).big_integer().null())
                    .col(ColumnDef::new(StudentProfiles::Mobile).string().null())
                    .col(ColumnDef::new(StudentProfiles::Status).string().not_null())
                    .col(
                        ColumnDef::new(StudentProfiles::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentProfiles::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(StudentProfiles::Table, StudentProfiles::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 每个班级内学号唯一
        manager
            .create_index(
                Index::create()
                    .name("idx_student_profiles_class_roll")
                    .table(StudentProfiles::Table)
                    .col(StudentProfiles::ClassName)
                    .col(StudentProfiles::Roll)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 创建教师档案表
        manager
            .create_table(
                Table::create()
                    .table(TeacherProfiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TeacherProfiles::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(TeacherProfiles::UserId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(TeacherProfiles::Salary)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TeacherProfiles::JoinDate)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(TeacherProfiles::Mobile).string().null())
                    .col(ColumnDef::new(TeacherProfiles::Status).string().not_null())
                    .col(
                        ColumnDef::new(TeacherProfiles::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TeacherProfiles::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(TeacherProfiles::Table, TeacherProfiles::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建考勤表
        manager
            .create_table(
                Table::create()
                    .table(Attendance::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Attendance::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Attendance::Roll).integer().not_null())
                    .col(ColumnDef::new(Attendance::ClassName).string().not_null())
                    .col(ColumnDef::new(Attendance::Date).string().not_null())
                    .col(ColumnDef::new(Attendance::Status).string().not_null())
                    .col(
                        ColumnDef::new(Attendance::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // (班级, 日期, 学号) 唯一，重新点名时整体替换
        manager
            .create_index(
                Index::create()
                    .name("idx_attendance_class_date_roll")
                    .table(Attendance::Table)
                    .col(Attendance::ClassName)
                    .col(Attendance::Date)
                    .col(Attendance::Roll)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 创建缴费表
        manager
            .create_table(
                Table::create()
                    .table(FeePayments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FeePayments::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(FeePayments::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(FeePayments::Amount).big_integer().not_null())
                    .col(ColumnDef::new(FeePayments::DueDate).string().not_null())
                    .col(ColumnDef::new(FeePayments::PaymentDate).string().null())
                    .col(ColumnDef::new(FeePayments::Status).string().not_null())
                    .col(ColumnDef::new(FeePayments::PaymentMethod).string().null())
                    .col(ColumnDef::new(FeePayments::TransactionId).string().null())
                    .col(ColumnDef::new(FeePayments::Notes).text().null())
                    .col(
                        ColumnDef::new(FeePayments::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(FeePayments::Table, FeePayments::StudentId)
                            .to(StudentProfiles::Table, StudentProfiles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建图书表
        manager
            .create_table(
                Table::create()
                    .table(LibraryBooks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LibraryBooks::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(LibraryBooks::Title).string().not_null())
                    .col(ColumnDef::new(LibraryBooks::Author).string().not_null())
                    .col(
                        ColumnDef::new(LibraryBooks::Isbn)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(LibraryBooks::Category).string().not_null())
                    .col(ColumnDef::new(LibraryBooks::Publisher).string().not_null())
                    .col(
                        ColumnDef::new(LibraryBooks::PublicationYear)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(LibraryBooks::Pages).integer().not_null())
                    .col(ColumnDef::new(LibraryBooks::Status).string().not_null())
                    .col(
                        ColumnDef::new(LibraryBooks::AddedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建借阅表
        manager
            .create_table(
                Table::create()
                    .table(BookLoans::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BookLoans::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(BookLoans::BookId).big_integer().not_null())
                    .col(
                        ColumnDef::new(BookLoans::BorrowerId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(BookLoans::BorrowDate).string().not_null())
                    .col(ColumnDef::new(BookLoans::DueDate).string().not_null())
                    .col(ColumnDef::new(BookLoans::ReturnDate).string().null())
                    .col(
                        ColumnDef::new(BookLoans::FineAmount)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(BookLoans::IsReturned)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(BookLoans::Table, BookLoans::BookId)
                            .to(LibraryBooks::Table, LibraryBooks::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(BookLoans::Table, BookLoans::BorrowerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建考试表
        manager
            .create_table(
                Table::create()
                    .table(Exams::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Exams::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Exams::Name).string().not_null())
                    .col(ColumnDef::new(Exams::ExamType).string().not_null())
                    .col(ColumnDef::new(Exams::Subject).string().not_null())
                    .col(ColumnDef::new(Exams::ClassName).string().not_null())
                    .col(ColumnDef::new(Exams::ExamDate).big_integer().not_null())
                    .col(
                        ColumnDef::new(Exams::DurationMinutes)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Exams::MaxMarks).integer().not_null())
                    .col(ColumnDef::new(Exams::Instructions).text().null())
                    .col(ColumnDef::new(Exams::CreatedBy).big_integer().not_null())
                    .col(ColumnDef::new(Exams::CreatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Exams::Table, Exams::CreatedBy)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建考试成绩表
        manager
            .create_table(
                Table::create()
                    .table(ExamResults::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ExamResults::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ExamResults::ExamId).big_integer().not_null())
                    .col(
                        ColumnDef::new(ExamResults::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ExamResults::MarksObtained)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ExamResults::Grade).string().not_null())
                    .col(ColumnDef::new(ExamResults::Remarks).text().null())
                    .col(
                        ColumnDef::new(ExamResults::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ExamResults::Table, ExamResults::ExamId)
                            .to(Exams::Table, Exams::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ExamResults::Table, ExamResults::StudentId)
                            .to(StudentProfiles::Table, StudentProfiles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 一场考试每个学生至多一条成绩
        manager
            .create_index(
                Index::create()
                    .name("idx_exam_results_exam_student")
                    .table(ExamResults::Table)
                    .col(ExamResults::ExamId)
                    .col(ExamResults::StudentId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 创建通知表
        manager
            .create_table(
                Table::create()
                    .table(Notifications::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Notifications::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Notifications::RecipientId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Notifications::Title).string().not_null())
                    .col(ColumnDef::new(Notifications::Message).text().not_null())
                    .col(ColumnDef::new(Notifications::Kind).string().not_null())
                    .col(
                        ColumnDef::new(Notifications::IsRead)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Notifications::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Notifications::ExpiresAt).big_integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Notifications::Table, Notifications::RecipientId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建校园活动表
        manager
            .create_table(
                Table::create()
                    .table(SchoolEvents::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SchoolEvents::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SchoolEvents::Title).string().not_null())
                    .col(ColumnDef::new(SchoolEvents::Description).text().null())
                    .col(ColumnDef::new(SchoolEvents::EventType).string().not_null())
                    .col(
                        ColumnDef::new(SchoolEvents::StartDate)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SchoolEvents::EndDate)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(SchoolEvents::Location).string().not_null())
                    .col(
                        ColumnDef::new(SchoolEvents::OrganizerId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SchoolEvents::IsPublic)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(SchoolEvents::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(SchoolEvents::Table, SchoolEvents::OrganizerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建学生学情快照表
        manager
            .create_table(
                Table::create()
                    .table(StudentPerformance::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StudentPerformance::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(StudentPerformance::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentPerformance::Semester)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentPerformance::AttendancePercentage)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentPerformance::AverageMarks)
                            .double()
                            .not_null(),
                    )
                    .col(ColumnDef::new(StudentPerformance::Grade).string().not_null())
                    .col(ColumnDef::new(StudentPerformance::Remarks).text().null())
                    .col(
                        ColumnDef::new(StudentPerformance::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(StudentPerformance::Table, StudentPerformance::StudentId)
                            .to(StudentProfiles::Table, StudentProfiles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 每个学生每学期一条快照，按需重算
        manager
            .create_index(
                Index::create()
                    .name("idx_student_performance_student_semester")
                    .table(StudentPerformance::Table)
                    .col(StudentPerformance::StudentId)
                    .col(StudentPerformance::Semester)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StudentPerformance::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SchoolEvents::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Notifications::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ExamResults::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Exams::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(BookLoans::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(LibraryBooks::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(FeePayments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Attendance::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TeacherProfiles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(StudentProfiles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Username,
    Email,
    PasswordHash,
    Role,
    Status,
    ProfileName,
    Mobile,
    LastLogin,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum StudentProfiles {
    Table,
    Id,
    UserId,
    Roll,
    ClassName,
    Fee,
    Mobile,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum TeacherProfiles {
    Table,
    Id,
    UserId,
    Salary,
    JoinDate,
    Mobile,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Attendance {
    Table,
    Id,
    Roll,
    ClassName,
    Date,
    Status,
    CreatedAt,
}

#[derive(DeriveIden)]
enum FeePayments {
    Table,
    Id,
    StudentId,
    Amount,
    DueDate,
    PaymentDate,
    Status,
    PaymentMethod,
    TransactionId,
    Notes,
    CreatedAt,
}

#[derive(DeriveIden)]
enum LibraryBooks {
    Table,
    Id,
    Title,
    Author,
    Isbn,
    Category,
    Publisher,
    PublicationYear,
    Pages,
    Status,
    AddedAt,
}

#[derive(DeriveIden)]
enum BookLoans {
    Table,
    Id,
    BookId,
    BorrowerId,
    BorrowDate,
    DueDate,
    ReturnDate,
    FineAmount,
    IsReturned,
}

#[derive(DeriveIden)]
enum Exams {
    Table,
    Id,
    Name,
    ExamType,
    Subject,
    ClassName,
    ExamDate,
    DurationMinutes,
    MaxMarks,
    Instructions,
    CreatedBy,
    CreatedAt,
}

#[derive(DeriveIden)]
enum ExamResults {
    Table,
    Id,
    ExamId,
    StudentId,
    MarksObtained,
    Grade,
    Remarks,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Notifications {
    Table,
    Id,
    RecipientId,
    Title,
    Message,
    Kind,
    IsRead,
    CreatedAt,
    ExpiresAt,
}

#[derive(DeriveIden)]
enum SchoolEvents {
    Table,
    Id,
    Title,
    Description,
    EventType,
    StartDate,
    EndDate,
    Location,
    OrganizerId,
    IsPublic,
    CreatedAt,
}

#[derive(DeriveIden)]
enum StudentPerformance {
    Table,
    Id,
    StudentId,
    Semester,
    AttendancePercentage,
    AverageMarks,
    Grade,
    Remarks,
    UpdatedAt,
}

use super::{SeaOrmStorage, db_error, insert_error};
use crate::entity::prelude::{BookLoans, LibraryBooks};
use crate::entity::{book_loans, library_books};
use crate::errors::Result;
use crate::models::{
    PaginationInfo,
    library::{
        entities::{BookLoan, BookStatus, LibraryBook},
        requests::{BookListQuery, CreateBookRequest, UpdateBookRequest},
        responses::BookListResponse,
    },
};
use crate::utils::escape_like_pattern;
use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set, TransactionTrait,
};

const DATE_FMT: &str = "%Y-%m-%d";

impl SeaOrmStorage {
    /// 图书入库
    pub async fn create_book_impl(&self, req: CreateBookRequest) -> Result<LibraryBook> {
        let now = chrono::Utc::now().timestamp();

        let model = library_books::ActiveModel {
            title: Set(req.title),
            author: Set(req.author),
            isbn: Set(req.isbn),
            category: Set(req.category),
            publisher: Set(req.publisher),
            publication_year: Set(req.publication_year),
            pages: Set(req.pages),
            status: Set(BookStatus::Available.to_string()),
            added_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(insert_error("图书入库失败"))?;

        Ok(result.into_book())
    }

    /// 通过 ID 获取图书
    pub async fn get_book_by_id_impl(&self, id: i64) -> Result<Option<LibraryBook>> {
        let result = LibraryBooks::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_error("查询图书失败"))?;

        Ok(result.map(|m| m.into_book()))
    }

    /// 分页列出图书
    pub async fn list_books_impl(&self, query: BookListQuery) -> Result<BookListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = LibraryBooks::find();

        if let Some(ref status) = query.status {
            select = select.filter(library_books::Column::Status.eq(status.to_string()));
        }

        if let Some(ref category) = query.category {
            select = select.filter(library_books::Column::Category.eq(category));
        }

        // 书名/作者/ISBN 搜索
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(library_books::Column::Title.contains(&escaped))
                    .add(library_books::Column::Author.contains(&escaped))
                    .add(library_books::Column::Isbn.contains(&escaped)),
            );
        }

        select = select.order_by_asc(library_books::Column::Title);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(db_error("查询图书总数失败"))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(db_error("查询图书页数失败"))?;
        let rows = paginator
            .fetch_page(page - 1)
            .await
            .map_err(db_error("查询图书列表失败"))?;

        Ok(BookListResponse {
            items: rows.into_iter().map(|m| m.into_book()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新图书信息
    pub async fn update_book_impl(
        &self,
        id: i64,
        update: UpdateBookRequest,
    ) -> Result<Option<LibraryBook>> {
        let existing = self.get_book_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let mut model = library_books::ActiveModel {
            id: Set(id),
            ..Default::default()
        };

        if let Some(title) = update.title {
            model.title = Set(title);
        }

        if let Some(author) = update.author {
            model.author = Set(author);
        }

        if let Some(category) = update.category {
            model.category = Set(category);
        }

        if let Some(publisher) = update.publisher {
            model.publisher = Set(publisher);
        }

        if let Some(publication_year) = update.publication_year {
            model.publication_year = Set(publication_year);
        }

        if let Some(pages) = update.pages {
            model.pages = Set(pages);
        }

        if let Some(status) = update.status {
            model.status = Set(status.to_string());
        }

        model
            .update(&self.db)
            .await
            .map_err(db_error("更新图书失败"))?;

        self.get_book_by_id_impl(id).await
    }

    /// 删除图书
    pub async fn delete_book_impl(&self, id: i64) -> Result<bool> {
        let result = LibraryBooks::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_error("删除图书失败"))?;

        Ok(result.rows_affected > 0)
    }

    /// 借出：事务内建借阅记录并把书翻为 borrowed
    pub async fn create_loan_impl(
        &self,
        book_id: i64,
        borrower_id: i64,
        borrow_date: NaiveDate,
        due_date: NaiveDate,
    ) -> Result<BookLoan> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(db_error("开启事务失败"))?;

        let loan = book_loans::ActiveModel {
            book_id: Set(book_id),
            borrower_id: Set(borrower_id),
            borrow_date: Set(borrow_date.format(DATE_FMT).to_string()),
            due_date: Set(due_date.format(DATE_FMT).to_string()),
            fine_amount: Set(0),
            is_returned: Set(false),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(db_error("创建借阅记录失败"))?;

        LibraryBooks::update_many()
            .col_expr(
                library_books::Column::Status,
                sea_orm::sea_query::Expr::value(BookStatus::Borrowed.to_string()),
            )
            .filter(library_books::Column::Id.eq(book_id))
            .exec(&txn)
            .await
            .map_err(db_error("更新馆藏状态失败"))?;

        txn.commit()
            .await
            .map_err(db_error("提交事务失败"))?;

        Ok(loan.into_loan())
    }

    /// 通过 ID 获取借阅记录
    pub async fn get_loan_by_id_impl(&self, id: i64) -> Result<Option<BookLoan>> {
        let result = BookLoans::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_error("查询借阅记录失败"))?;

        Ok(result.map(|m| m.into_loan()))
    }

    /// 某借阅人的全部借阅记录
    pub async fn list_loans_by_borrower_impl(&self, borrower_id: i64) -> Result<Vec<BookLoan>> {
        let rows = BookLoans::find()
            .filter(book_loans::Column::BorrowerId.eq(borrower_id))
            .order_by_desc(book_loans::Column::BorrowDate)
            .all(&self.db)
            .await
            .map_err(db_error("查询借阅记录失败"))?;

        Ok(rows.into_iter().map(|m| m.into_loan()).collect())
    }

    /// 归还：事务内写回归还信息并把书翻回 available
    pub async fn complete_loan_impl(
        &self,
        id: i64,
        return_date: NaiveDate,
        fine_amount: i64,
    ) -> Result<Option<BookLoan>> {
        let Some(loan) = self.get_loan_by_id_impl(id).await? else {
            return Ok(None);
        };

        let txn = self
            .db
            .begin()
            .await
            .map_err(db_error("开启事务失败"))?;

        book_loans::ActiveModel {
            id: Set(id),
            return_date: Set(Some(return_date.format(DATE_FMT).to_string())),
            fine_amount: Set(fine_amount),
            is_returned: Set(true),
            ..Default::default()
        }
        .update(&txn)
        .await
        .map_err(db_error("更新借阅记录失败"))?;

        LibraryBooks::update_many()
            .col_expr(
                library_books::Column::Status,
                sea_orm::sea_query::Expr::value(BookStatus::Available.to_string()),
            )
            .filter(library_books::Column::Id.eq(loan.book_id))
            .exec(&txn)
            .await
            .map_err(db_error("更新馆藏状态失败"))?;

        txn.commit()
            .await
            .map_err(db_error("提交事务失败"))?;

        self.get_loan_by_id_impl(id).await
    }
}

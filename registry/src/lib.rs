use std::sync::Arc;

use adapter::{
    database::ConnectionPool,
    repository::{
        book::BookRepositoryImpl, health::HealthCheckRepositoryImpl, loan::LoanRepositoryImpl,
        member::MemberRepositoryImpl, stats::StatsRepositoryImpl, user::UserRepositoryImpl,
    },
};
use kernel::repository::{
    book::BookRepository, health::HealthCheckRepository, loan::LoanRepository,
    member::MemberRepository, stats::StatsRepository, user::UserRepository,
};

// 各リポジトリの実装を保持し、ハンドラから参照できるようにする
#[derive(Clone)]
pub struct AppRegistryImpl {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    book_repository: Arc<dyn BookRepository>,
    member_repository: Arc<dyn MemberRepository>,
    loan_repository: Arc<dyn LoanRepository>,
    user_repository: Arc<dyn UserRepository>,
    stats_repository: Arc<dyn StatsRepository>,
}

impl AppRegistryImpl {
    pub fn new(pool: ConnectionPool) -> Self {
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(pool.clone()));
        let book_repository = Arc::new(BookRepositoryImpl::new(pool.clone()));
        let member_repository = Arc::new(MemberRepositoryImpl::new(pool.clone()));
        let loan_repository = Arc::new(LoanRepositoryImpl::new(pool.clone()));
        let user_repository = Arc::new(UserRepositoryImpl::new(pool.clone()));
        let stats_repository = Arc::new(StatsRepositoryImpl::new(pool));
        Self {
            health_check_repository,
            book_repository,
            member_repository,
            loan_repository,
            user_repository,
            stats_repository,
        }
    }
}

#[mockall::automock]
pub trait AppRegistryExt {
    fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository>;
    fn book_repository(&self) -> Arc<dyn BookRepository>;
    fn member_repository(&self) -> Arc<dyn MemberRepository>;
    fn loan_repository(&self) -> Arc<dyn LoanRepository>;
    fn user_repository(&self) -> Arc<dyn UserRepository>;
    fn stats_repository(&self) -> Arc<dyn StatsRepository>;
}

impl AppRegistryExt for AppRegistryImpl {
    fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    fn book_repository(&self) -> Arc<dyn BookRepository> {
        self.book_repository.clone()
    }

    fn member_repository(&self) -> Arc<dyn MemberRepository> {
        self.member_repository.clone()
    }

    fn loan_repository(&self) -> Arc<dyn LoanRepository> {
        self.loan_repository.clone()
    }

    fn user_repository(&self) -> Arc<dyn UserRepository> {
        self.user_repository.clone()
    }

    fn stats_repository(&self) -> Arc<dyn StatsRepository> {
        self.stats_repository.clone()
    }
}

pub type AppRegistry = Arc<dyn AppRegistryExt + Send + Sync + 'static>;

pub mod product;
pub mod user;

pub use product::MongoProductRepository;
pub use user::MongoUserRepository;

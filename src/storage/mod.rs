pub mod interface;
pub mod rounds;

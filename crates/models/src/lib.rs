pub mod errors;
pub mod db;
pub mod customer;
pub mod product;
pub mod shopping_cart;
pub mod cart_product;

#[cfg(test)]
mod tests;

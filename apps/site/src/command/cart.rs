use super::Command;
use crate::cart::Cart;
use crate::cli::CartAction;
use crate::config::Config;
use crate::error::Result;

pub struct CartCommand {
    cart: Cart,
    action: CartAction,
}

impl CartCommand {
    pub fn new(config: Config, action: CartAction) -> Self {
        Self {
            cart: Cart::new(config.cart_file()),
            action,
        }
    }
}

#[async_trait::async_trait]
impl Command for CartCommand {
    async fn execute(&self) -> Result<()> {
        match &self.action {
            CartAction::Add { sku } => {
                let count = self.cart.add(sku)?;
                println!("Agregado ✓ ({} en {})", count, self.cart.path().display());
            }
            CartAction::List => {
                for entry in self.cart.entries() {
                    let when = chrono::DateTime::from_timestamp_millis(entry.ts)
                        .map(|dt| dt.to_rfc3339())
                        .unwrap_or_default();
                    println!("{}  {}", entry.sku, when);
                }
            }
        }
        Ok(())
    }
}

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use shopping_cart_demo::cart::{format_currency, format_item_summary, Cart};
use shopping_cart_demo::exercises::{approx_phi, calculate_average, golden_ratio, process_data};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Totals further apart than this are reported as a mismatch.
const TOTAL_TOLERANCE: f64 = 0.01;

#[derive(Parser, Debug)]
#[command(
    name = "shopping_cart_demo",
    about = "Shopping cart and small exercises for debugger practice",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fill a cart, apply a discount and print the totals
    Cart(CartCommand),
    /// Print golden ratio approximations from consecutive Fibonacci numbers
    GoldenRatio {
        /// Largest Fibonacci order to use
        #[arg(
            env = "GOLDEN_RATIO_MAX_N",
            default_value_t = 10,
            value_parser = clap::value_parser!(u32).range(2..=i64::from(golden_ratio::MAX_ORDER))
        )]
        max_n: u32,
    },
    /// Run the filter/normalize pipeline and average an empty list
    ProcessData {
        /// Raw input values
        #[arg(
            allow_negative_numbers = true,
            default_values_t = [5.0, 15.0, 20.0, 40.0, 50.0]
        )]
        values: Vec<f64>,
    },
}

#[derive(Debug, Args)]
struct CartCommand {
    /// Line item as NAME:PRICE[:QTY]; repeatable. Defaults to a laptop, two mice and a keyboard
    #[arg(long = "item", short = 'i', value_parser = parse_item_arg)]
    items: Vec<ItemArg>,
    /// Discount percentage, 0 to 100
    #[arg(
        long,
        short = 'd',
        env = "CART_DISCOUNT_PERCENT",
        default_value_t = 10.0,
        allow_negative_numbers = true
    )]
    discount: f64,
    /// Print the cart summary as JSON instead of text
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Debug, Clone, PartialEq)]
struct ItemArg {
    name: String,
    unit_price: f64,
    quantity: u32,
}

fn main() -> Result<()> {
    init_tracing()?;
    let cli = Cli::parse();

    match cli.command {
        Commands::Cart(cmd) => run_cart(cmd)?,
        Commands::GoldenRatio { max_n } => run_golden_ratio(max_n)?,
        Commands::ProcessData { values } => run_process_data(&values)?,
    }

    Ok(())
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    if tracing::subscriber::set_global_default(
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .finish(),
    )
    .is_err()
    {
        // tracing already initialised; ignore.
    }
    Ok(())
}

fn default_items() -> Vec<ItemArg> {
    [("Laptop", 999.99, 1), ("Mouse", 29.99, 2), ("Keyboard", 79.99, 1)]
        .into_iter()
        .map(|(name, unit_price, quantity)| ItemArg {
            name: name.to_string(),
            unit_price,
            quantity,
        })
        .collect()
}

fn run_cart(cmd: CartCommand) -> Result<()> {
    let CartCommand {
        items,
        discount,
        json,
    } = cmd;
    let items = if items.is_empty() {
        default_items()
    } else {
        items
    };

    let mut cart = Cart::new();
    for item in items {
        cart.add_item(item.name.clone(), item.unit_price, item.quantity)
            .with_context(|| format!("failed to add item {:?}", item.name))?;
    }
    cart.set_discount(discount).context("failed to apply discount")?;
    info!(items = %format_item_summary(cart.items()), discount, "cart ready");

    if json {
        let body = serde_json::to_string_pretty(&cart.summary())
            .context("failed to serialize cart summary")?;
        println!("{body}");
        return Ok(());
    }

    let subtotal = cart.calculate_subtotal();
    let total = cart.calculate_total();
    let expected = subtotal * (1.0 - cart.discount_rate());

    println!("Items in cart: {}", cart.item_count());
    println!("Subtotal: {}", format_currency(subtotal));
    println!("Total with {}% discount: {}", discount, format_currency(total));
    println!("Expected total: {}", format_currency(expected));

    if (total - expected).abs() > TOTAL_TOLERANCE {
        warn!(total, expected, "cart total does not match the discounted subtotal");
        println!("WARNING: Total doesn't match expected value!");
    } else {
        println!("Total is correct.");
    }
    Ok(())
}

fn run_golden_ratio(max_n: u32) -> Result<()> {
    for n in 2..=max_n {
        let phi = approx_phi(n).with_context(|| format!("approximation failed at n={n}"))?;
        println!("n={n}: phi≈{phi}");
    }
    Ok(())
}

fn run_process_data(values: &[f64]) -> Result<()> {
    let processed = process_data(values);
    println!("Cleaned: {:?}", processed.cleaned);
    println!("Normalized: {:?}", processed.normalized);

    match calculate_average(&[]) {
        Ok(average) => println!("Average: {average}"),
        Err(err) => {
            warn!(error = %err, "average of an empty list");
            println!("Average: unavailable ({err})");
        }
    }
    Ok(())
}

/// Parses `NAME:PRICE[:QTY]`. The name may itself contain colons.
fn parse_item_arg(raw: &str) -> Result<ItemArg, String> {
    let mut parts = raw.rsplitn(3, ':');
    let last = parts.next().unwrap_or_default();
    let middle = parts.next();
    let rest = parts.next();

    let (name, price, quantity) = match (rest, middle) {
        (Some(name), Some(price)) if price.parse::<f64>().is_ok() => {
            let quantity = last
                .parse::<u32>()
                .map_err(|_| format!("invalid quantity {last:?} in {raw:?}"))?;
            (name, price, quantity)
        }
        (Some(name), Some(head)) => (
            // `head` is part of the name, e.g. "Cable:USB-C:9.99"
            &raw[..name.len() + 1 + head.len()],
            last,
            1,
        ),
        (None, Some(name)) => (name, last, 1),
        _ => return Err(format!("expected NAME:PRICE[:QTY], got {raw:?}")),
    };

    if name.is_empty() {
        return Err(format!("missing item name in {raw:?}"));
    }
    let unit_price = price
        .parse::<f64>()
        .map_err(|_| format!("invalid price {price:?} in {raw:?}"))?;

    Ok(ItemArg {
        name: name.to_string(),
        unit_price,
        quantity,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, unit_price: f64, quantity: u32) -> ItemArg {
        ItemArg {
            name: name.into(),
            unit_price,
            quantity,
        }
    }

    #[test]
    fn test_parse_item_with_quantity() {
        assert_eq!(parse_item_arg("Mouse:29.99:2"), Ok(item("Mouse", 29.99, 2)));
    }

    #[test]
    fn test_parse_item_defaults_quantity() {
        assert_eq!(parse_item_arg("Laptop:999.99"), Ok(item("Laptop", 999.99, 1)));
    }

    #[test]
    fn test_parse_item_name_with_colons() {
        assert_eq!(
            parse_item_arg("Cable:USB-C:9.99"),
            Ok(item("Cable:USB-C", 9.99, 1))
        );
        assert_eq!(
            parse_item_arg("Cable:USB-C:9.99:3"),
            Ok(item("Cable:USB-C", 9.99, 3))
        );
    }

    #[test]
    fn test_parse_item_keeps_negative_price_for_cart_validation() {
        assert_eq!(parse_item_arg("Bad:-1"), Ok(item("Bad", -1.0, 1)));
    }

    #[test]
    fn test_parse_item_rejects_malformed() {
        assert!(parse_item_arg("NoPrice").is_err());
        assert!(parse_item_arg(":5").is_err());
        assert!(parse_item_arg("Mouse:cheap").is_err());
        assert!(parse_item_arg("Mouse:1:-2").is_err());
    }

    #[test]
    fn test_default_cart_items() {
        let items = default_items();
        assert_eq!(items.len(), 3);
        assert_eq!(items[1], item("Mouse", 29.99, 2));
    }
}

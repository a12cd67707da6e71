use kilowise_core::error::KilowiseError;
use serde::Serialize;

pub fn print<T: Serialize + ?Sized>(value: &T) -> Result<(), KilowiseError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}

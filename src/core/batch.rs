use crate::core::discount::{calculate_discount, check_percentage};
use crate::core::{DiscountedPrice, PriceEntry};
use crate::utils::error::Result;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// 讀取 `name,price` 格式的 CSV 價目表
pub fn read_price_list<R: Read>(reader: R) -> Result<Vec<PriceEntry>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut entries = Vec::new();
    for row in csv_reader.deserialize() {
        let entry: PriceEntry = row?;
        entries.push(entry);
    }
    Ok(entries)
}

pub fn apply_discount(entries: &[PriceEntry], percentage: f64) -> Result<Vec<DiscountedPrice>> {
    // 先檢查一次，避免處理到一半才失敗
    check_percentage(percentage)?;

    entries
        .iter()
        .map(|entry| -> Result<DiscountedPrice> {
            Ok(DiscountedPrice {
                name: entry.name.clone(),
                price: entry.price,
                percentage,
                discounted_price: calculate_discount(entry.price, percentage)?,
            })
        })
        .collect()
}

pub fn write_discounted<W: Write>(writer: W, rows: &[DiscountedPrice]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// 讀檔、套用折扣、寫檔；回傳處理的筆數
pub fn discount_price_list<P: AsRef<Path>, Q: AsRef<Path>>(
    input_path: P,
    output_path: Q,
    percentage: f64,
) -> Result<usize> {
    check_percentage(percentage)?;

    tracing::info!("📥 Reading price list from: {}", input_path.as_ref().display());
    let entries = read_price_list(File::open(input_path.as_ref())?)?;
    tracing::debug!("Read {} entries", entries.len());

    let rows = apply_discount(&entries, percentage)?;

    if let Some(parent) = output_path.as_ref().parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    write_discounted(File::create(output_path.as_ref())?, &rows)?;
    tracing::info!(
        "📁 Wrote {} discounted prices to: {}",
        rows.len(),
        output_path.as_ref().display()
    );

    Ok(rows.len())
}

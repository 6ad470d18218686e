use crate::core::aggregate::{format_seconds_to_time, total_calls, total_login_time};
use crate::store::{KvBackend, RecordStore};
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use std::fs;
use std::path::Path;

/// On-disk size of a storage location: a file, or the sum of a directory's files.
fn storage_size(path: &Path) -> u64 {
    if path.is_dir() {
        fs::read_dir(path)
            .map(|entries| {
                entries
                    .filter_map(|e| e.ok())
                    .filter_map(|e| e.metadata().ok())
                    .map(|m| m.len())
                    .sum()
            })
            .unwrap_or(0)
    } else {
        fs::metadata(path).map(|m| m.len()).unwrap_or(0)
    }
}

pub fn print_store_info<B: KvBackend>(store: &RecordStore<B>, db_path: &str) {
    println!();

    //
    // 1) LOCATION + SIZE
    //
    let size = storage_size(Path::new(db_path));
    let kb = (size as f64) / 1024.0;

    println!("{}• Storage:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Key:{} {}", CYAN, RESET, store.key());
    println!("{}• Size:{} {:.2} KB", CYAN, RESET, kb);

    //
    // 2) TOTAL RECORDS
    //
    let records = store.records();
    println!(
        "{}• Total records:{} {}{}{}",
        CYAN,
        RESET,
        GREEN,
        records.len(),
        RESET
    );

    //
    // 3) DATE RANGE (records are newest first)
    //
    let fmt_first = records
        .last()
        .map(|r| r.date_str())
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = records
        .first()
        .map(|r| r.date_str())
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    //
    // 4) MONTHS + TOTALS
    //
    let months = store.months_with_data();
    println!("{}• Months with data:{} {}", CYAN, RESET, months.len());

    if !records.is_empty() {
        let avg = total_calls(&records) as f64 / records.len() as f64;
        println!(
            "{}• Total login:{} {}",
            CYAN,
            RESET,
            format_seconds_to_time(total_login_time(&records))
        );
        println!("{}• Average calls/day:{} {:.2}", CYAN, RESET, avg);
    }

    println!();
}

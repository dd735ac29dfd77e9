use chrono::{Local, NaiveDate};

#[cfg(not(test))]
/// フォーム初期値に利用する現在のローカル日付を取得する。
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}


#[cfg(test)]
pub use mock_date::today;

/// `(trade_date, trade_time, trade_price, trade_quantity)`
pub type Row = (&'static str, &'static str, &'static str, u64);

pub fn by_name(name: &str) -> Option<&'static [Row]> {
    match name {
        // Day one closes at 15:30, day two opens at 09:15.
        "TWO_DAY" => Some(&[
            ("09/03/2012", "09:15:00.000000", "100.00", 10),
            ("09/03/2012", "09:16:30.000000", "100.50", 5),
            ("09/03/2012", "09:20:00.000000", "101.00", 20),
            ("09/03/2012", "09:24:10.000000", "100.75", 15),
            ("09/03/2012", "15:30:00.000000", "101.25", 10),
            ("09/04/2012", "09:15:00.000000", "102.00", 7),
            ("09/04/2012", "09:17:00.000000", "101.50", 3),
            ("09/04/2012", "09:21:00.000000", "102.50", 10),
        ]),
        "SINGLE_TRADE_DAYS" => Some(&[
            ("09/03/2012", "10:00:00.000000", "50.00", 1),
            ("09/04/2012", "10:00:00.000000", "51.00", 2),
            ("09/05/2012", "10:00:00.000000", "49.00", 3),
        ]),
        "MINUTE_GRID" => Some(&[
            ("09/03/2012", "09:00:00.000000", "100", 1),
            ("09/03/2012", "09:00:30.000000", "101", 1),
            ("09/03/2012", "09:01:15.000000", "102", 1),
        ]),
        _ => None,
    }
}

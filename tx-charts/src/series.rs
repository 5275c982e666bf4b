//! Series extracted from transfers for plotting.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use tx_viewer_shared::Transfer;

/// One point of the value-over-time series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValuePoint {
    pub timestamp: DateTime<Utc>,
    pub value_eth: f64,
}

/// Number of transactions on one calendar day (UTC).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyVolume {
    pub date: NaiveDate,
    pub count: usize,
}

/// Value of each transfer in ether, in input order.
pub fn value_series(transfers: &[Transfer]) -> Vec<ValuePoint> {
    transfers
        .iter()
        .map(|t| ValuePoint {
            timestamp: t.timestamp,
            value_eth: t.value_eth,
        })
        .collect()
}

/// Transfers grouped by UTC date, oldest day first.
pub fn daily_volume(transfers: &[Transfer]) -> Vec<DailyVolume> {
    let mut counts: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for transfer in transfers {
        *counts.entry(transfer.timestamp.date_naive()).or_default() += 1;
    }

    counts
        .into_iter()
        .map(|(date, count)| DailyVolume { date, count })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tx_viewer_shared::RawTransaction;

    fn transfer_at(ts: &str, wei: &str) -> Transfer {
        Transfer::try_from(RawTransaction::new("0xa", "0xb", wei, "0xh", ts)).unwrap()
    }

    #[test]
    fn test_value_series_converts_to_ether() {
        let transfers = vec![
            transfer_at("1700000000", "1000000000000000000"),
            transfer_at("1700000100", "250000000000000000"),
        ];

        let series = value_series(&transfers);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].value_eth, 1.0);
        assert_eq!(series[1].value_eth, 0.25);
        assert_eq!(series[1].timestamp.timestamp(), 1_700_000_100);
    }

    #[test]
    fn test_daily_volume_groups_and_sorts() {
        // 2023-11-14 22:13:20, 2023-11-14 23:59:59, 2023-11-13 00:00:00, 2023-11-15 00:00:00
        let transfers = vec![
            transfer_at("1700000000", "1"),
            transfer_at("1700006399", "1"),
            transfer_at("1699833600", "1"),
            transfer_at("1700006400", "1"),
        ];

        let volume = daily_volume(&transfers);
        let days: Vec<(String, usize)> = volume
            .iter()
            .map(|v| (v.date.to_string(), v.count))
            .collect();

        assert_eq!(
            days,
            vec![
                ("2023-11-13".to_string(), 1),
                ("2023-11-14".to_string(), 2),
                ("2023-11-15".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_empty_input_gives_empty_series() {
        assert!(value_series(&[]).is_empty());
        assert!(daily_volume(&[]).is_empty());
    }
}

//! 效期預警

use chrono::{Local, Months, NaiveDate};
use stock_core::{InventoryView, LotSummary};

/// 效期預警時界（月）
pub const EXPIRY_HORIZON_MONTHS: u32 = 3;

/// 效期預警評估器
pub struct ExpiryRiskEvaluator;

impl ExpiryRiskEvaluator {
    /// 計算預警截止日：今天加上三個日曆月
    ///
    /// 月底溢出時取該月最後一天（1/31 + 3 個月 = 4/30）。超出日期範圍時回傳
    /// `NaiveDate::MAX`，此時所有日期都在時界內。
    pub fn horizon(today: NaiveDate) -> NaiveDate {
        today
            .checked_add_months(Months::new(EXPIRY_HORIZON_MONTHS))
            .unwrap_or(NaiveDate::MAX)
    }

    /// 到期日早於截止日（不含）即為即將到期
    pub fn is_approaching_expiry(expiry_date: NaiveDate, today: NaiveDate) -> bool {
        expiry_date < Self::horizon(today)
    }

    /// 批次是否即將到期，無到期日的批次永遠不標記
    pub fn is_lot_at_risk(lot: &LotSummary, today: NaiveDate) -> bool {
        lot.expiry_date
            .is_some_and(|expiry| Self::is_approaching_expiry(expiry, today))
    }

    /// 列出產品中即將到期的批次
    pub fn expiring_lots(view: &InventoryView, today: NaiveDate) -> Vec<&LotSummary> {
        view.lots
            .iter()
            .filter(|lot| Self::is_lot_at_risk(lot, today))
            .collect()
    }

    /// 本地日曆的今天
    pub fn today() -> NaiveDate {
        Local::now().date_naive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn lot(expiry_date: Option<NaiveDate>) -> LotSummary {
        LotSummary {
            batch_number: "LOT-1".to_string(),
            expiry_date,
            quantity: 10,
            warehouse: "Dépôt Central".to_string(),
        }
    }

    #[rstest]
    #[case(date(2026, 1, 15), date(2026, 4, 15))]
    #[case(date(2026, 1, 31), date(2026, 4, 30))]
    #[case(date(2025, 11, 30), date(2026, 2, 28))]
    #[case(date(2027, 11, 30), date(2028, 2, 29))]
    #[case(date(2026, 10, 15), date(2027, 1, 15))]
    fn test_horizon_uses_calendar_months(#[case] today: NaiveDate, #[case] expected: NaiveDate) {
        assert_eq!(ExpiryRiskEvaluator::horizon(today), expected);
    }

    #[rstest]
    #[case(date(2026, 12, 15), true)] // +2 個月
    #[case(date(2027, 2, 15), false)] // +4 個月
    #[case(date(2027, 1, 14), true)] // 截止日前一天
    #[case(date(2027, 1, 15), false)] // 剛好等於截止日
    #[case(date(2026, 9, 1), true)] // 已過期
    fn test_is_approaching_expiry(#[case] expiry: NaiveDate, #[case] expected: bool) {
        let today = date(2026, 10, 15);
        assert_eq!(ExpiryRiskEvaluator::is_approaching_expiry(expiry, today), expected);
    }

    #[test]
    fn test_horizon_overflow() {
        let today = NaiveDate::MAX;
        assert_eq!(ExpiryRiskEvaluator::horizon(today), NaiveDate::MAX);
        assert!(ExpiryRiskEvaluator::is_approaching_expiry(date(2026, 1, 1), today));
    }

    #[test]
    fn test_lot_without_expiry_never_flagged() {
        let today = date(2026, 10, 15);

        assert!(!ExpiryRiskEvaluator::is_lot_at_risk(&lot(None), today));
        assert!(ExpiryRiskEvaluator::is_lot_at_risk(&lot(Some(date(2026, 11, 1))), today));
    }

    #[test]
    fn test_expiring_lots() {
        let today = date(2026, 10, 15);
        let view = InventoryView {
            id: uuid::Uuid::new_v4(),
            sku: "REF-010".to_string(),
            name: "Sérum".to_string(),
            category: "Médicaments".to_string(),
            unit: "BTE".to_string(),
            min_stock: 10,
            total_stock: 30,
            status: stock_core::StockStatus::InStock,
            has_expiry: true,
            lots: vec![
                lot(Some(date(2026, 12, 1))),
                lot(None),
                lot(Some(date(2027, 6, 1))),
            ],
        };

        let expiring = ExpiryRiskEvaluator::expiring_lots(&view, today);

        assert_eq!(expiring.len(), 1);
        assert_eq!(expiring[0].expiry_date, Some(date(2026, 12, 1)));
    }
}

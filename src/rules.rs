use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar;
use crate::decimal::Rate;
use crate::errors::Result;

/// one entry of the rate schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterestRule {
    pub effective_date: NaiveDate,
    pub rule_id: String,
    pub rate: Rate,
}

/// rate schedule ordered by effective date, shared by all accounts
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InterestRuleSet {
    rules: Vec<InterestRule>,
}

impl InterestRuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// insert a rule at its sorted position, or replace the rule already
    /// effective on the same date
    pub fn upsert(&mut self, date_str: &str, rule_id: &str, rate_str: &str) -> Result<InterestRule> {
        let rate = Rate::parse_percent(rate_str)?;
        let effective_date = calendar::parse_date(date_str)?;
        let rule = InterestRule {
            effective_date,
            rule_id: rule_id.to_string(),
            rate,
        };
        match self
            .rules
            .binary_search_by(|r| r.effective_date.cmp(&effective_date))
        {
            Ok(idx) => self.rules[idx] = rule.clone(),
            Err(idx) => self.rules.insert(idx, rule.clone()),
        }
        Ok(rule)
    }

    /// rate in effect on a date: the latest rule whose effective date is
    /// on or before it, zero when none qualifies
    pub fn rate_on(&self, date: NaiveDate) -> Rate {
        self.rule_on(date).map(|r| r.rate).unwrap_or(Rate::ZERO)
    }

    /// the rule in effect on a date, resolved by binary search
    pub fn rule_on(&self, date: NaiveDate) -> Option<&InterestRule> {
        let idx = self.rules.partition_point(|r| r.effective_date <= date);
        if idx == 0 {
            None
        } else {
            self.rules.get(idx - 1)
        }
    }

    /// all rules ordered by effective date
    pub fn rules(&self) -> &[InterestRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::LedgerError;
    use rust_decimal_macros::dec;

    fn date(s: &str) -> NaiveDate {
        calendar::parse_date(s).unwrap()
    }

    #[test]
    fn test_upsert_keeps_rules_ordered() {
        let mut rules = InterestRuleSet::new();
        rules.upsert("20230615", "RULE03", "2.20").unwrap();
        rules.upsert("20230101", "RULE01", "1.95").unwrap();
        rules.upsert("20230520", "RULE02", "1.90").unwrap();

        let dates: Vec<_> = rules.rules().iter().map(|r| r.effective_date).collect();
        assert_eq!(
            dates,
            vec![date("20230101"), date("20230520"), date("20230615")]
        );
    }

    #[test]
    fn test_upsert_replaces_same_date_in_place() {
        let mut rules = InterestRuleSet::new();
        rules.upsert("20230520", "RULE02", "1.90").unwrap();
        rules.upsert("20230520", "RULE02B", "2.50").unwrap();

        assert_eq!(rules.len(), 1);
        let rule = &rules.rules()[0];
        assert_eq!(rule.rule_id, "RULE02B");
        assert_eq!(rule.rate.as_percent(), dec!(2.50));
    }

    #[test]
    fn test_rate_on_picks_latest_qualifying_rule() {
        let mut rules = InterestRuleSet::new();
        rules.upsert("20230101", "RULE01", "1.95").unwrap();
        rules.upsert("20230520", "RULE02", "1.90").unwrap();
        rules.upsert("20230615", "RULE03", "2.20").unwrap();

        assert_eq!(rules.rate_on(date("20230519")).as_percent(), dec!(1.95));
        // effective on its own start date
        assert_eq!(rules.rate_on(date("20230520")).as_percent(), dec!(1.90));
        assert_eq!(rules.rate_on(date("20230614")).as_percent(), dec!(1.90));
        assert_eq!(rules.rate_on(date("20230615")).as_percent(), dec!(2.20));
        assert_eq!(rules.rate_on(date("20251231")).as_percent(), dec!(2.20));
    }

    #[test]
    fn test_rate_is_zero_before_earliest_rule() {
        let mut rules = InterestRuleSet::new();
        assert_eq!(rules.rate_on(date("20230101")), Rate::ZERO);

        rules.upsert("20230520", "RULE02", "1.90").unwrap();
        assert_eq!(rules.rate_on(date("20230519")), Rate::ZERO);
    }

    #[test]
    fn test_upsert_rejects_out_of_range_rates() {
        let mut rules = InterestRuleSet::new();
        assert!(matches!(
            rules.upsert("20230101", "RULE01", "0"),
            Err(LedgerError::InvalidRate { .. })
        ));
        assert!(rules.upsert("20230101", "RULE01", "100").is_err());
        assert!(rules.upsert("20230101", "RULE01", "-1.5").is_err());
        assert!(rules.upsert("20230101", "RULE01", "x").is_err());
        assert!(rules.is_empty());
    }

    #[test]
    fn test_upsert_rejects_bad_dates() {
        let mut rules = InterestRuleSet::new();
        assert!(matches!(
            rules.upsert("2023061", "RULE01", "1.95"),
            Err(LedgerError::InvalidDate { .. })
        ));
        assert!(rules.upsert("20230230", "RULE01", "1.95").is_err());
        assert!(rules.is_empty());
    }

    #[test]
    fn test_invalid_rate_reported_before_invalid_date() {
        let mut rules = InterestRuleSet::new();
        assert!(matches!(
            rules.upsert("bad", "RULE01", "200"),
            Err(LedgerError::InvalidRate { .. })
        ));
    }
}

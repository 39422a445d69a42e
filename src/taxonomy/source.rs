use serde::{Deserialize, Serialize};

/// Transaction categories published by the account-linking provider, minus income.
pub const STANDARD_SOURCE: &str = include_str!("categories.csv");

/// One `(primary_key, detailed_key, description)` triple of the category table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRow {
    pub primary_key: String,
    pub detailed_key: String,
    pub description: String,
}

impl SourceRow {
    pub fn new(
        primary_key: impl Into<String>,
        detailed_key: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            primary_key: primary_key.into(),
            detailed_key: detailed_key.into(),
            description: description.into(),
        }
    }
}

impl<P, D, S> From<(P, D, S)> for SourceRow
where
    P: Into<String>,
    D: Into<String>,
    S: Into<String>,
{
    fn from((primary_key, detailed_key, description): (P, D, S)) -> Self {
        Self::new(primary_key, detailed_key, description)
    }
}

/// Parses the raw category table.
///
/// Fields are split on every comma and only the first three are kept, so a
/// description ends at its first comma. Quotes are dropped from descriptions.
pub fn parse_rows(raw: &str) -> Vec<SourceRow> {
    raw.trim()
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            let mut fields = line.trim_end_matches('\r').split(',');
            let primary_key = fields.next().unwrap_or_default();
            let detailed_key = fields.next().unwrap_or_default();
            if primary_key.is_empty() || detailed_key.is_empty() {
                return None;
            }
            let description = fields
                .next()
                .map(|text| text.replace('"', "").trim().to_string())
                .unwrap_or_default();
            Some(SourceRow::new(primary_key, detailed_key, description))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table_has_every_row() {
        let rows = parse_rows(STANDARD_SOURCE);
        assert_eq!(rows.len(), 91);
        assert_eq!(rows[0].primary_key, "TRANSFER_OUT");
        assert_eq!(
            rows[0].detailed_key,
            "TRANSFER_OUT_INVESTMENT_AND_RETIREMENT_FUNDS"
        );
    }

    #[test]
    fn description_stops_at_first_comma() {
        let rows = parse_rows(STANDARD_SOURCE);
        let beer = rows
            .iter()
            .find(|row| row.detailed_key == "FOOD_AND_DRINK_BEER_WINE_AND_LIQUOR")
            .unwrap();
        assert_eq!(beer.description, "Beer");
        let student = rows
            .iter()
            .find(|row| row.detailed_key == "LOAN_PAYMENTS_STUDENT_LOAN_PAYMENT")
            .unwrap();
        assert_eq!(student.description, "Payments on student loans. For college tuition");
    }

    #[test]
    fn skips_blank_and_incomplete_lines() {
        let rows = parse_rows("\nTRAVEL,TRAVEL_FLIGHTS,Airline expenses\n\nTRAVEL\n,X,y\nA,B\n");
        assert_eq!(
            rows,
            vec![
                SourceRow::new("TRAVEL", "TRAVEL_FLIGHTS", "Airline expenses"),
                SourceRow::new("A", "B", ""),
            ]
        );
    }

    #[test]
    fn strips_quotes_and_padding() {
        let rows = parse_rows("MEDICAL,MEDICAL_EYE_CARE,  \"Optometrists\"  ");
        assert_eq!(rows[0].description, "Optometrists");
    }
}

/// Connector words lowered again after capitalization, applied in this order.
///
/// Replacement is a case-sensitive substring match on the capitalized string,
/// so words that merely start with a connector are lowered too
/// (`Insurance` -> `insurance`). Display strings downstream depend on that.
const CONNECTORS: [(&str, &str); 9] = [
    ("And", "and"),
    ("Or", "or"),
    ("The", "the"),
    ("Of", "of"),
    ("In", "in"),
    ("On", "on"),
    ("At", "at"),
    ("To", "to"),
    ("For", "for"),
];

/// Turns an upper snake case provider key into a display name.
pub fn title_case(key: &str) -> String {
    let spaced = key.to_lowercase().replace('_', " ");
    let mut capitalized = String::with_capacity(spaced.len());
    let mut in_word = false;
    for ch in spaced.chars() {
        let is_word = ch.is_ascii_alphanumeric() || ch == '_';
        if is_word && !in_word {
            capitalized.extend(ch.to_uppercase());
        } else {
            capitalized.push(ch);
        }
        in_word = is_word;
    }
    CONNECTORS
        .iter()
        .fold(capitalized, |name, (from, to)| name.replace(from, to))
}

#[cfg(test)]
mod tests {
    use super::title_case;

    #[test]
    fn capitalizes_each_word() {
        assert_eq!(title_case("LOAN_PAYMENTS"), "Loan Payments");
        assert_eq!(title_case("TRANSFER_OUT"), "Transfer Out");
    }

    #[test]
    fn lowers_connector_words() {
        assert_eq!(title_case("FOOD_AND_DRINK"), "Food and Drink");
        assert_eq!(title_case("GOVERNMENT_AND_NON_PROFIT"), "Government and Non Profit");
    }

    #[test]
    fn lowers_words_that_start_with_a_connector() {
        assert_eq!(title_case("INSURANCE"), "insurance");
        assert_eq!(title_case("TOLLS"), "tolls");
        assert_eq!(title_case("ATM_FEES"), "atm Fees");
        assert_eq!(title_case("OFFICE_SUPPLIES"), "office Supplies");
        assert_eq!(title_case("ONLINE_MARKETPLACES"), "online Marketplaces");
        assert_eq!(title_case("FOREIGN_TRANSACTION_FEES"), "foreign Transaction Fees");
        assert_eq!(title_case("TOBACCO_AND_VAPE"), "tobacco and Vape");
    }

    #[test]
    fn leaves_other_words_alone() {
        assert_eq!(title_case("OTHER_TRANSFER_OUT"), "Other Transfer Out");
        assert_eq!(title_case("AUTOMOTIVE"), "Automotive");
        assert_eq!(title_case("ENTERTAINMENT"), "Entertainment");
    }
}

use super::aggregate::Employee;
use crate::enums::division::DivisionFilter;

/// Records visible under `selection`, in their original order.
pub fn filter_by_division(records: &[Employee], selection: DivisionFilter) -> Vec<Employee> {
    if selection == DivisionFilter::All {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|e| selection.matches(&e.division))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_employee::aggregate::Salary;
    use crate::enums::division::Division;
    use chrono::NaiveDate;

    fn employee(id: &str, division: Division) -> Employee {
        Employee {
            id: id.to_string(),
            first_name: "First".to_string(),
            last_name: id.to_string(),
            address: "Jl. Sudirman 1".to_string(),
            position: "Staff".to_string(),
            division,
            salary: Salary::parse("5000000").unwrap(),
            birth_date: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            join_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            working_status: None,
        }
    }

    fn ids(records: &[Employee]) -> Vec<&str> {
        records.iter().map(|e| e.id.as_str()).collect()
    }

    fn sample() -> Vec<Employee> {
        vec![
            employee("E1", Division::Hr),
            employee("E2", Division::Engineering),
            employee("E3", Division::Hr),
            employee("E4", Division::Finance),
            employee("E5", Division::Engineering),
        ]
    }

    #[test]
    fn test_engineering_keeps_positions_two_and_five() {
        let visible = filter_by_division(&sample(), DivisionFilter::Engineering);
        assert_eq!(ids(&visible), vec!["E2", "E5"]);
    }

    #[test]
    fn test_all_returns_input_unchanged() {
        let mut records = sample();
        records.push(employee("E6", Division::Unrecognized("Legal".to_string())));
        assert_eq!(filter_by_division(&records, DivisionFilter::All), records);
    }

    #[test]
    fn test_every_selection_yields_matching_subsequence() {
        let mut records = sample();
        records.push(employee("E6", Division::Unrecognized("hr".to_string())));
        records.push(employee("E7", Division::Marketing));

        for selection in DivisionFilter::options() {
            let visible = filter_by_division(&records, selection);

            // order-preserving subsequence of the input
            let mut source = records.iter();
            for v in &visible {
                assert!(source.any(|r| r == v), "{} out of order", v.id);
            }

            if selection != DivisionFilter::All {
                assert!(visible.iter().all(|e| e.division.label() == selection.label()));
            }
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(filter_by_division(&[], DivisionFilter::Finance).is_empty());
    }
}

//! Free-text name query tokenisation and first-name/surname partitioning.
//!
//! Splitting mirrors the long-standing behaviour of the Westbook search API:
//! parts are separated by single spaces, runs of spaces yield empty parts,
//! trailing empty parts are dropped, and an empty query is one empty part.
//! Candidate names are the parts concatenated with no separator.

/// Queries with more parts than this are not searched at all.
pub const MAX_NAME_PARTS: usize = 4;

/// A query split into its name parts.
///
/// # Examples
/// ```
/// use westbook::domain::search::NameQuery;
///
/// let query = NameQuery::parse("Ola Nordmann Hansen");
/// let splits: Vec<_> = query
///     .partitions()
///     .map(|p| (p.first_name, p.surname))
///     .collect();
/// assert_eq!(
///     splits,
///     vec![
///         ("Ola".to_owned(), "NordmannHansen".to_owned()),
///         ("OlaNordmann".to_owned(), "Hansen".to_owned()),
///     ]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameQuery<'a> {
    raw: &'a str,
    parts: Vec<&'a str>,
}

/// One candidate split of a name query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamePartition {
    /// Index of the first surname part.
    pub split_index: usize,
    /// Parts before the split, concatenated.
    pub first_name: String,
    /// Parts from the split onwards, concatenated.
    pub surname: String,
}

impl<'a> NameQuery<'a> {
    /// Split `raw` into name parts.
    pub fn parse(raw: &'a str) -> Self {
        let parts = if raw.is_empty() {
            vec![raw]
        } else {
            let mut parts: Vec<&str> = raw.split(' ').collect();
            while parts.last().is_some_and(|part| part.is_empty()) {
                parts.pop();
            }
            parts
        };
        Self { raw, parts }
    }

    /// The query exactly as received.
    pub fn raw(&self) -> &'a str {
        self.raw
    }

    /// Name parts after splitting.
    pub fn parts(&self) -> &[&'a str] {
        &self.parts
    }

    /// True when the query has too many parts to be searched.
    pub fn is_unsupported(&self) -> bool {
        self.parts.len() > MAX_NAME_PARTS
    }

    /// Candidate partitions in ascending split order.
    ///
    /// Yields `parts - 1` partitions, so zero or one part yields nothing.
    pub fn partitions(&self) -> impl Iterator<Item = NamePartition> + '_ {
        (1..self.parts.len()).map(move |split_index| {
            let (head, tail) = self.parts.split_at(split_index);
            NamePartition {
                split_index,
                first_name: head.concat(),
                surname: tail.concat(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Anna", &["Anna"])]
    #[case("Anna Olsen", &["Anna", "Olsen"])]
    #[case("Anna  Olsen", &["Anna", "", "Olsen"])]
    #[case("Anna Olsen ", &["Anna", "Olsen"])]
    #[case(" Anna", &["", "Anna"])]
    #[case("", &[""])]
    #[case("   ", &[])]
    fn splits_like_the_legacy_api(#[case] raw: &str, #[case] expected: &[&str]) {
        assert_eq!(NameQuery::parse(raw).parts(), expected);
    }

    #[rstest]
    #[case("a b c d", false)]
    #[case("a b c d e", true)]
    #[case("a b c d    ", false)]
    #[case("a b c d  e", true)]
    fn more_than_four_parts_is_unsupported(#[case] raw: &str, #[case] unsupported: bool) {
        assert_eq!(NameQuery::parse(raw).is_unsupported(), unsupported);
    }

    #[rstest]
    #[case("Anna", 0)]
    #[case("Anna Olsen", 1)]
    #[case("Ola Nordmann Hansen", 2)]
    #[case("Per Ola Nordmann Hansen", 3)]
    fn yields_one_partition_per_split_point(#[case] raw: &str, #[case] expected: usize) {
        assert_eq!(NameQuery::parse(raw).partitions().count(), expected);
    }

    #[rstest]
    fn partitions_concatenate_without_separator() {
        let query = NameQuery::parse("Per Ola Nordmann Hansen");
        let partitions: Vec<NamePartition> = query.partitions().collect();

        let indices: Vec<usize> = partitions.iter().map(|p| p.split_index).collect();
        assert_eq!(indices, vec![1, 2, 3]);
        assert_eq!(partitions[0].first_name, "Per");
        assert_eq!(partitions[0].surname, "OlaNordmannHansen");
        assert_eq!(partitions[2].first_name, "PerOlaNordmann");
        assert_eq!(partitions[2].surname, "Hansen");
    }

    #[rstest]
    fn raw_query_is_preserved() {
        let query = NameQuery::parse("Anna  Olsen ");
        assert_eq!(query.raw(), "Anna  Olsen ");
    }
}

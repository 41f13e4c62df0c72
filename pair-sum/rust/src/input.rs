use crate::error::{Error, Result};

/// A parsed command line: the target and the sequence to search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Query {
    pub target: i32,
    pub nums: Vec<i32>,
}

/// Parses `<target> [numbers...]`, where numbers may be separate arguments,
/// comma separated, or a mix of both. The program name must already be stripped.
///
/// ```
/// use pair_sum::input::parse_args;
///
/// let query = parse_args(["9", "2,7", "11", "15"]).unwrap();
/// assert_eq!(query.target, 9);
/// assert_eq!(query.nums, vec![2, 7, 11, 15]);
/// ```
pub fn parse_args<I, S>(args: I) -> Result<Query>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut args = args.into_iter();

    let target = args.next().ok_or(Error::MissingTarget)?;
    let target = target.as_ref().trim();
    let target = target
        .parse::<i32>()
        .map_err(|_| Error::InvalidTarget(target.to_owned()))?;

    let mut nums = Vec::new();
    for arg in args {
        for value in arg.as_ref().split(',').map(str::trim).filter(|v| !v.is_empty()) {
            let n = value.parse::<i32>().map_err(|_| Error::InvalidNumber {
                position: nums.len(),
                value: value.to_owned(),
            })?;
            nums.push(n);
        }
    }

    Ok(Query { target, nums })
}

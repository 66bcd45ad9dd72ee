//! Argument resolution.
//!
//! Each resolver consumes a prefix of the argument tokens and returns the
//! value it found together with the tokens it left alone. A token that is
//! neither a literal nor a known variable is run as a nested command.

use super::context::{Context, Result};
use super::Kind;
use crate::error;

fn split_first(args: &[String]) -> Result<(&String, &[String])> {
    match args.split_first() {
        Some(split) => Ok(split),
        None => Err(error!(MissingArgument).into()),
    }
}

impl Context {
    pub(super) fn resolve_text<'a>(&mut self, args: &'a [String]) -> Result<(String, &'a [String])> {
        let (first, rest) = split_first(args)?;
        if !first.starts_with('"') {
            if let Some(val) = self.vars.fetch(first) {
                return Ok((val.text().to_string(), rest));
            }
            let (val, remaining) = self.dispatch(first, rest)?;
            return Ok((val.into_text(), remaining));
        }
        if first.len() > 1 && first.ends_with('"') {
            return Ok((first[1..first.len() - 1].to_string(), rest));
        }
        let mut s = first[1..].to_string();
        s.push(' ');
        for (index, arg) in rest.iter().enumerate() {
            if let Some(last) = arg.strip_suffix('"') {
                s.push_str(last);
                return Ok((s, &rest[index + 1..]));
            }
            s.push_str(arg);
            s.push(' ');
        }
        Err(error!(ExpectedString; s.trim_end()).into())
    }

    pub(super) fn resolve_number<'a>(&mut self, args: &'a [String]) -> Result<(i64, &'a [String])> {
        let (first, rest) = split_first(args)?;
        if let Ok(n) = first.parse::<i32>() {
            return Ok((i64::from(n), rest));
        }
        if let Some(val) = self.vars.fetch(first) {
            return Ok((val.number(), rest));
        }
        let (val, remaining) = self.dispatch(first, rest)?;
        Ok((val.number(), remaining))
    }

    pub(super) fn resolve_condition<'a>(
        &mut self,
        args: &'a [String],
    ) -> Result<(bool, &'a [String])> {
        let (first, rest) = split_first(args)?;
        match first.as_str() {
            "TRUE" => return Ok((true, rest)),
            "FALSE" => return Ok((false, rest)),
            _ => {}
        }
        if let Some(val) = self.vars.fetch(first) {
            return Ok((val.condition(), rest));
        }
        let (val, remaining) = self.dispatch(first, rest)?;
        Ok((val.condition(), remaining))
    }

    pub(super) fn resolve_kind<'a>(&mut self, args: &'a [String]) -> Result<(Kind, &'a [String])> {
        let (first, rest) = split_first(args)?;
        Ok((Kind::from_token(first), rest))
    }
}

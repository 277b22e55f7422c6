// buildenv: Build Environment Generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Config file grammar.
//!
//! ```text
//! KEY = $VAR     required lookup, error if VAR is unset
//! KEY = $VAR?    optional lookup, line skipped if VAR is unset
//! name: Ident    container name
//! access: public | package | internal
//! encode: yes | no
//! ```
//!
//! A line containing `=` is always an assignment, even if it also holds `:`.

use std::collections::btree_map::Entry;
use std::str::FromStr;

use tracing::{debug, trace};

use super::{AccessLevel, Parser, parse_lines};
use crate::error::{InputRole, ParseError, ParseErrorKind};

/// Reserved directive names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Keyword {
    Name,
    Access,
    Encode,
}

impl FromStr for Keyword {
    type Err = ParseErrorKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "access" => Ok(Self::Access),
            "encode" => Ok(Self::Encode),
            _ => Err(ParseErrorKind::Keyword),
        }
    }
}

impl Parser<'_> {
    /// Parses config file text, updating settings and seeding entries.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] for the first malformed line, an unset
    /// required variable, or a key assigned twice.
    pub fn parse_config(&mut self, text: &str) -> Result<(), ParseError> {
        parse_lines(text, InputRole::Config, |line| self.config_line(line))
    }

    fn config_line(&mut self, line: &str) -> Result<(), ParseErrorKind> {
        if let Some((key, value)) = line.split_once('=') {
            self.assignment(key.trim(), value.trim())
        } else if let Some((keyword, value)) = line.split_once(':') {
            self.directive(keyword.trim(), value.trim())
        } else {
            Err(ParseErrorKind::Separator)
        }
    }

    fn assignment(&mut self, key: &str, value: &str) -> Result<(), ParseErrorKind> {
        if key.is_empty() {
            return Err(ParseErrorKind::Separator);
        }
        let var = value.strip_prefix('$').ok_or(ParseErrorKind::At)?;
        let (var, optional) = var
            .strip_suffix('?')
            .map_or((var, false), |name| (name, true));

        let Some(resolved) = self.lookup.get(var) else {
            if optional {
                trace!(key, var, "optional variable unset, skipping");
                return Ok(());
            }
            return Err(ParseErrorKind::Env {
                key: var.to_string(),
            });
        };

        match self.entries.entry(key.to_string()) {
            Entry::Occupied(_) => Err(ParseErrorKind::KeyExist {
                key: key.to_string(),
            }),
            Entry::Vacant(slot) => {
                debug!(key, var, "resolved config entry");
                slot.insert(resolved);
                Ok(())
            }
        }
    }

    fn directive(&mut self, keyword: &str, value: &str) -> Result<(), ParseErrorKind> {
        if keyword.is_empty() {
            return Err(ParseErrorKind::Separator);
        }
        let keyword = keyword.parse::<Keyword>()?;
        if value.is_empty() {
            return Err(ParseErrorKind::Separator);
        }
        match keyword {
            Keyword::Name => self.settings.name = value.to_string(),
            Keyword::Access => self.settings.access = value.parse::<AccessLevel>()?,
            Keyword::Encode => {
                self.settings.encode = match value {
                    "yes" => true,
                    "no" => false,
                    _ => return Err(ParseErrorKind::EncodeSpec),
                };
            }
        }
        debug!(?keyword, value, "applied directive");
        Ok(())
    }
}

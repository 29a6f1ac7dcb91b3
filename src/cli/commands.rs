//! CLI command implementations
//!
//! Commands render their output into a `String` and return it; printing and exit handling happen
//! in the top-level `run()`.

use miette::Report;
use ptk_core::lang::conventions::PATH_SEPARATOR;
use ptk_core::names;

use crate::abbrev::{AbbrevError, AbbrevTag, NameAbbrevService, TypeRef, TypeRegistry};
use crate::printer::Printer;

use super::{CliError, CliResult};

/// Render an abbreviation error with its diagnostic code and help.
pub(super) fn diagnostic_error(err: AbbrevError) -> CliError {
    CliError::failure(format!("{:?}", Report::new(err)))
}

// ============================================================================
// abbrev / resolve
// ============================================================================

/// Abbreviate each type, one tag per line.
pub fn abbreviate_types(service: &mut NameAbbrevService, types: &[String]) -> CliResult<String> {
    let mut out = String::new();
    for spelled in types {
        let abbreviation = service.abbreviate_name(spelled).map_err(diagnostic_error)?;
        out.push_str(&abbreviation.to_string());
        out.push('\n');
    }
    Ok(out)
}

/// Resolve each name, one qualified type per line.
///
/// Names may be given as bare short names or as `alias:short` tags using a registered alias. A
/// tag must name the alias its type is written under.
pub fn resolve_names(service: &mut NameAbbrevService, names: &[String]) -> CliResult<String> {
    let mut out = String::new();
    for name in names {
        let (alias, short) = match AbbrevTag::parse(name) {
            Some(tag) if service.namespaces().iter().any(|ns| ns.alias == tag.alias) => {
                (Some(tag.alias), tag.short)
            }
            Some(tag) => {
                return Err(CliError::failure(format!(
                    "unknown alias `{}` in `{name}`",
                    tag.alias
                )));
            }
            None => (None, name.clone()),
        };
        let resolved = service.resolve(&short).map_err(diagnostic_error)?;
        if let Some(alias) = alias {
            let written = service
                .abbreviate(&TypeRef::new(resolved.element.as_str()))
                .map_err(diagnostic_error)?;
            if written.alias != alias {
                return Err(CliError::failure(format!(
                    "`{name}` resolves to `{resolved}`, which is written under alias `{}`",
                    written.alias
                )));
            }
        }
        out.push_str(&resolved.to_string());
        out.push('\n');
    }
    Ok(out)
}

// ============================================================================
// prefixes / namespaces
// ============================================================================

/// List `alias = uri` for every alias that carries a URI.
pub fn list_prefixes(service: &NameAbbrevService) -> String {
    let mut out = String::new();
    for (alias, uri) in service.used_prefixes() {
        out.push_str(&format!("{alias} = {uri}\n"));
    }
    out
}

/// Render every namespace with the registered types it directly contains and their tags.
///
/// Abbreviation happens in namespace order, so the listing shows the same ownership that a
/// document written by this configuration would.
pub fn describe_namespaces(service: &mut NameAbbrevService) -> CliResult<String> {
    let namespaces = service.namespaces().to_vec();
    let mut printer: Printer<String> = Printer::new();

    for ns in &namespaces {
        match &ns.uri {
            Some(uri) => printer.indentln(format!("{} ({} = {uri})", ns.prefix, ns.alias)),
            None => printer.indentln(format!("{} ({})", ns.prefix, ns.alias)),
        }

        let members = direct_members(service.provider(), &ns.prefix);
        printer.inc_indent();
        for member in members {
            let Some(memo) = printer.memoize_start(member.clone()) else {
                continue;
            };
            let abbreviation = service.abbreviate_name(&member).map_err(diagnostic_error)?;
            printer.indentln(format!("{} -> {abbreviation}", names::simple_name(&member)));
            printer
                .memoize_stop(memo)
                .map_err(|e| CliError::failure(format!("error: {e}")))?;
        }
        printer.dec_indent();
    }

    printer.log_memo_stats();
    Ok(printer.finish())
}

/// Registered types whose qualified name is `prefix.Simple`, sorted by name.
fn direct_members(registry: &TypeRegistry, prefix: &str) -> Vec<String> {
    let mut members: Vec<String> = registry
        .iter()
        .filter(|desc| {
            desc.name
                .strip_prefix(prefix)
                .and_then(|rest| rest.strip_prefix(PATH_SEPARATOR))
                .is_some_and(|simple| !simple.is_empty() && !names::is_qualified(simple))
        })
        .map(|desc| desc.name.clone())
        .collect();
    members.sort();
    members
}

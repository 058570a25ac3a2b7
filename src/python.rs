//! Python signature adapter.
//!
//! Bridges `rustpython_parser`'s AST to the classifier: the five argument
//! groups of a `def` map directly onto the parameter taxonomy, so a
//! function's `ast::Arguments` can be turned into descriptors and
//! classified without ever executing any Python.

use crate::argset::ArgSet;
use crate::classify::classify;
use crate::errors::{Result, SignatureError};
use crate::param::Param;
use rustpython_parser::{ast, parse, Mode};

/// Map a function's argument table onto ordered parameter descriptors.
///
/// `posonlyargs` become positional-only, plain `args` positional-or-named,
/// `vararg` variadic-positional, `kwonlyargs` named-only, and `kwarg`
/// variadic-named. Default-presence comes from each entry's `default`
/// slot; the two variadic groups cannot carry one.
///
/// Receiver parameters (`self`, `cls`) are kept as-is: the caller is
/// responsible for presenting the effective parameter list when inspecting
/// bound methods.
pub fn params_from_args(args: &ast::Arguments) -> Vec<Param> {
    let mut params = Vec::new();

    for arg in &args.posonlyargs {
        params.push(Param::positional_only(arg.default.is_some()));
    }
    for arg in &args.args {
        params.push(Param::positional_or_named(
            arg.def.arg.as_str(),
            arg.default.is_some(),
        ));
    }
    if args.vararg.is_some() {
        params.push(Param::VarPositional);
    }
    for arg in &args.kwonlyargs {
        params.push(Param::named_only(
            arg.def.arg.as_str(),
            arg.default.is_some(),
        ));
    }
    if args.kwarg.is_some() {
        params.push(Param::VarNamed);
    }

    params
}

/// Classify the named function in a Python module source.
///
/// Parses `source` as a module and locates the first `def` or `async def`
/// called `name`, searching nested function and class bodies in
/// declaration order. Lambdas and callables bound by assignment cannot be
/// found by name lookup.
pub fn argset_for_function(source: &str, name: &str) -> Result<ArgSet> {
    let module = parse(source, Mode::Module, "<module>").map_err(|e| SignatureError::Parse {
        message: e.to_string(),
    })?;

    let body = match &module {
        ast::Mod::Module(module) => &module.body,
        _ => {
            return Err(SignatureError::Parse {
                message: "expected a module".to_string(),
            })
        }
    };

    let args = find_function_args(body, name)
        .ok_or_else(|| SignatureError::FunctionNotFound(name.to_string()))?;

    log::debug!("classifying signature of `{name}`");
    Ok(classify(params_from_args(args)))
}

/// Depth-first search for a function definition by name.
fn find_function_args<'a>(body: &'a [ast::Stmt], name: &str) -> Option<&'a ast::Arguments> {
    for stmt in body {
        match stmt {
            ast::Stmt::FunctionDef(func_def) => {
                if func_def.name.as_str() == name {
                    return Some(&func_def.args);
                }
                if let Some(args) = find_function_args(&func_def.body, name) {
                    return Some(args);
                }
            }
            ast::Stmt::AsyncFunctionDef(func_def) => {
                if func_def.name.as_str() == name {
                    return Some(&func_def.args);
                }
                if let Some(args) = find_function_args(&func_def.body, name) {
                    return Some(args);
                }
            }
            ast::Stmt::ClassDef(class_def) => {
                if let Some(args) = find_function_args(&class_def.body, name) {
                    return Some(args);
                }
            }
            _ => {}
        }
    }
    None
}

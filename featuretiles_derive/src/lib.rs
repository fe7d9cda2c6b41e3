//! Procedural macros shared by the featuretiles crates.

mod args;

use crate::args::ContextArgs;
use proc_macro::TokenStream;
use proc_macro2::{Ident, Span};
use quote::{ToTokens, quote};
use syn::{ReturnType, parse_macro_input};

/// Wraps the error of a function returning `anyhow::Result` with a context message.
///
/// The attribute takes `format!` arguments, which may reference the function's
/// parameters:
///
/// ```ignore
/// #[context("Failed to load features from {path:?}")]
/// fn load(path: &Path) -> Result<Vec<Feature>> { ... }
/// ```
///
/// Prefix the arguments with `move,` when the body has to take ownership of captured
/// parameters.
#[proc_macro_attribute]
pub fn context(args: TokenStream, input: TokenStream) -> TokenStream {
	let ContextArgs { move_token, message } = parse_macro_input!(args);
	let mut function = parse_macro_input!(input as syn::ItemFn);

	let return_type = match &function.sig.output {
		ReturnType::Default => {
			return syn::Error::new_spanned(&function.sig, "#[context] requires a function returning Result")
				.to_compile_error()
				.into();
		}
		ReturnType::Type(_, ty) => ty.clone(),
	};

	if function.sig.asyncness.is_some() {
		return syn::Error::new_spanned(&function.sig, "#[context] does not support async functions")
			.to_compile_error()
			.into();
	}

	let body = &function.block;
	let err = Ident::new("err", Span::mixed_site());
	let once = Ident::new("once", Span::mixed_site());

	// Moving a non-Copy value into the closure makes it FnOnce, so the body may
	// consume the function's parameters.
	let wrapped = quote! {
		let #once = ::core::iter::empty::<()>();
		(#move_token || -> #return_type {
			::core::mem::drop(#once);
			#body
		})()
		.map_err(|#err| #err.context(format!(#message)).into())
	};
	function.block.stmts = vec![syn::Stmt::Expr(syn::Expr::Verbatim(wrapped), None)];

	function.into_token_stream().into()
}

#[macro_use]
extern crate quote;

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use regex::Regex;
use syn::{
	parse_macro_input, punctuated::Punctuated, Attribute, Data, DeriveInput, Expr, Fields, ItemEnum, ItemFn,
	ItemStruct, Meta, NestedMeta, Stmt,
};

/// Adds hidden `_bot: rust_bw::bot::Bot` field and gives access to it through `Deref`.
#[proc_macro_attribute]
pub fn bot(_attr: TokenStream, item: TokenStream) -> TokenStream {
	let ItemStruct {
		attrs,
		vis,
		ident,
		generics,
		fields,
		..
	} = parse_macro_input!(item as ItemStruct);

	let fields = match fields {
		Fields::Named(named) => named.named,
		Fields::Unit => Punctuated::new(),
		Fields::Unnamed(_) => panic!("#[bot] needs a struct with named fields"),
	};
	let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

	TokenStream::from(quote! {
		#(#attrs)*
		#vis struct #ident #generics #where_clause {
			_bot: rust_bw::bot::Bot,
			#fields
		}
		impl #impl_generics std::ops::Deref for #ident #ty_generics #where_clause {
			type Target = rust_bw::bot::Bot;

			fn deref(&self) -> &Self::Target {
				&self._bot
			}
		}
		impl #impl_generics std::ops::DerefMut for #ident #ty_generics #where_clause {
			fn deref_mut(&mut self) -> &mut Self::Target {
				&mut self._bot
			}
		}
	})
}

/// Fills `_bot` field in the returned struct literal.
/// `#[bot_new]` uses `Default::default()`, `#[bot_new(config)]` uses `Bot::new(config)`.
#[proc_macro_attribute]
pub fn bot_new(attr: TokenStream, item: TokenStream) -> TokenStream {
	let init = if attr.is_empty() {
		quote! {Default::default()}
	} else {
		let config = parse_macro_input!(attr as Expr);
		quote! {rust_bw::bot::Bot::new(#config)}
	};
	let item = parse_macro_input!(item as ItemFn);

	let vis = item.vis;
	let signature = item.sig;
	let blocks = item.block.stmts.iter().map(|s| match s {
		Stmt::Expr(Expr::Struct(struct_expr)) => {
			let path = &struct_expr.path;
			let rest = match &struct_expr.rest {
				Some(expr) => quote! {..#expr},
				None => quote! {},
			};
			let fields = struct_expr.fields.iter();

			quote! {
				#path {
					_bot: #init,
					#(#fields,)*
					#rest
				}
			}
		}
		n => quote! {#n},
	});

	TokenStream::from(quote! {
		#vis #signature {
			#(#blocks)*
		}
	})
}

/// Whether `#[enum_from_str(use_primitives)]` is present.
fn parses_primitives(attrs: &[Attribute]) -> bool {
	attrs
		.iter()
		.filter(|a| a.path.is_ident("enum_from_str"))
		.any(|a| match a.parse_meta() {
			Ok(Meta::List(list)) => list.nested.iter().any(
				|n| matches!(n, NestedMeta::Meta(Meta::Path(path)) if path.is_ident("use_primitives")),
			),
			_ => panic!("Expected #[enum_from_str(use_primitives)]"),
		})
}

/// Parses variant names. With `#[enum_from_str(use_primitives)]` discriminants
/// are accepted too, which needs `num_traits::FromPrimitive` in scope.
#[proc_macro_derive(FromStr, attributes(enum_from_str))]
pub fn enum_from_str_derive(input: TokenStream) -> TokenStream {
	let item = parse_macro_input!(input as DeriveInput);
	let data = match item.data {
		Data::Enum(data) => data,
		_ => panic!("FromStr can only be derived for enums"),
	};

	let name = &item.ident;
	let names = data.variants.iter().map(|v| v.ident.to_string());
	let variants = data.variants.iter().map(|v| &v.ident);
	let fallback: TokenStream2 = if parses_primitives(&item.attrs) {
		quote! {
			other => other
				.parse::<i64>()
				.ok()
				.and_then(Self::from_i64)
				.ok_or(bw_macro::ParseEnumError),
		}
	} else {
		quote! {_ => Err(bw_macro::ParseEnumError),}
	};

	TokenStream::from(quote! {
		impl std::str::FromStr for #name {
			type Err = bw_macro::ParseEnumError;

			fn from_str(s: &str) -> Result<Self, Self::Err> {
				match s {
					#(#names => Ok(Self::#variants),)*
					#fallback
				}
			}
		}
	})
}

/// Generates `is_<variant>` method for every variant, e.g. `NonExistent` gets `is_non_existent`.
#[proc_macro_attribute]
pub fn variant_checkers(_attr: TokenStream, item: TokenStream) -> TokenStream {
	let item = parse_macro_input!(item as ItemEnum);
	// Digits stick to the preceding word: `EndGame2` is `end_game2`.
	let words = Regex::new(r"[A-Z0-9][a-z0-9]*").unwrap();

	let checkers = item.variants.iter().map(|v| {
		let variant = &v.ident;
		let snake = words
			.find_iter(&variant.to_string())
			.map(|m| m.as_str().to_ascii_lowercase())
			.collect::<Vec<_>>()
			.join("_");
		let checker = format_ident!("is_{}", snake);
		quote! {
			#[inline]
			pub fn #checker(self) -> bool {
				matches!(self, Self::#variant)
			}
		}
	});

	let name = &item.ident;
	TokenStream::from(quote! {
		#item
		impl #name {
			#(#checkers)*
		}
	})
}

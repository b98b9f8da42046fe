// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! *Part of the wider DecadeChart project*
//!
//! This crate contains the DecadeChart procedural macros
//!

extern crate proc_macro;

use proc_macro::TokenStream;
use quote::quote;
use syn::{LitInt, Token, parse_macro_input, punctuated::Punctuated};

// Keep in sync with the bounds in `decade-chart-core`
const MIN_YEAR: i64 = -9999;
const MAX_YEAR: i64 = 9999;

/// Generate the type with compile time bounds checking
fn generate_const_checked_integer_macro(
    input: TokenStream,
    type_name: &str,
    min: i64,
    max: i64,
) -> TokenStream {
    let lit = parse_macro_input!(input as LitInt);

    let value = match lit.base10_parse::<i64>() {
        Ok(v) => v,
        Err(_) => {
            return syn::Error::new_spanned(lit, "Expected a valid i64 integer literal")
                .to_compile_error()
                .into();
        }
    };

    if value < min || value > max {
        return syn::Error::new_spanned(
            lit,
            format!("{type_name} must be between {min} and {max}"),
        )
        .to_compile_error()
        .into();
    }

    let ident = syn::Ident::new(type_name, proc_macro2::Span::call_site());
    quote! {
        #ident::try_from(#value).unwrap()
    }
    .into()
}

/// Create a `Day`, using `day!(x)`, with compile time checking of the value.
#[proc_macro]
pub fn day(input: TokenStream) -> TokenStream {
    generate_const_checked_integer_macro(input, "Day", 1, 31)
}

/// Create a `Month`, using `month!(x)`, with compile time checking of the value.
#[proc_macro]
pub fn month(input: TokenStream) -> TokenStream {
    generate_const_checked_integer_macro(input, "Month", 1, 12)
}

/// Create a `Year`, using `year!(x)`, with compile time checking of the value.
#[proc_macro]
pub fn year(input: TokenStream) -> TokenStream {
    generate_const_checked_integer_macro(input, "Year", MIN_YEAR, MAX_YEAR)
}

/// Create a `Date`, using `date!(day, month, year)`, with compile time
/// checking of each field's range.  Whether the fields name a real calendar
/// day (e.g. a 29th Feb outside a leap year) is still checked at runtime.
#[proc_macro]
pub fn date(input: TokenStream) -> TokenStream {
    let args = parse_macro_input!(input with Punctuated::<LitInt, Token![,]>::parse_terminated);

    if args.len() != 3 {
        return syn::Error::new(
            proc_macro2::Span::call_site(),
            "Expected `date!(day, month, year)`",
        )
        .to_compile_error()
        .into();
    }

    let mut values = Vec::new();
    for lit in &args {
        match lit.base10_parse::<i64>() {
            Ok(v) => values.push(v),
            Err(_) => {
                return syn::Error::new_spanned(lit, "Expected a valid i64 integer literal")
                    .to_compile_error()
                    .into();
            }
        }
    }

    let (day, month, year) = (values[0], values[1], values[2]);
    for (value, name, min, max) in [
        (day, "Day", 1, 31),
        (month, "Month", 1, 12),
        (year, "Year", MIN_YEAR, MAX_YEAR),
    ] {
        if value < min || value > max {
            return syn::Error::new(
                proc_macro2::Span::call_site(),
                format!("{name} must be between {min} and {max}"),
            )
            .to_compile_error()
            .into();
        }
    }

    quote! {
        Date::from(#day, #month, #year).unwrap()
    }
    .into()
}

//! Derive macros shared by the board support crate.

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Error, Expr, Fields, Type};

/// Derives `const fn into_bits(self)` and `const fn from_bits(value)` for a fieldless enum with
/// an explicit primitive `repr`, as required for enum-typed fields of `bitfield-struct`
/// bitfields. `try_from_bits` returns `None` for values that name no variant, whereas
/// `from_bits` panics on them.
#[proc_macro_derive(AsBits)]
pub fn as_bits(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> Result<proc_macro2::TokenStream, Error> {
    let enum_name = &input.ident;
    let Data::Enum(data_enum) = &input.data else {
        return Err(Error::new_spanned(
            enum_name,
            "`AsBits` can only be derived for enums",
        ));
    };

    let repr: Type = input
        .attrs
        .iter()
        .filter(|attr| attr.path().is_ident("repr"))
        .find_map(|attr| attr.parse_args().ok())
        .ok_or_else(|| {
            Error::new_spanned(
                enum_name,
                "`AsBits` requires a primitive representation such as `#[repr(u64)]`",
            )
        })?;

    let mut arms = Vec::with_capacity(data_enum.variants.len());
    for variant in &data_enum.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(Error::new_spanned(
                variant,
                "`AsBits` variants cannot carry fields",
            ));
        }
        let variant_name = &variant.ident;
        let discriminant: &Expr = &variant
            .discriminant
            .as_ref()
            .ok_or_else(|| {
                Error::new_spanned(variant, "`AsBits` variants need an explicit discriminant")
            })?
            .1;
        arms.push(quote! {
            #discriminant => ::core::option::Option::Some(Self::#variant_name),
        });
    }

    Ok(quote! {
        impl #enum_name {
            /// Raw field encoding of this value
            pub const fn into_bits(self) -> #repr {
                self as _
            }

            /// Decodes a raw field, returning `None` if no variant has that encoding
            pub const fn try_from_bits(value: #repr) -> ::core::option::Option<Self> {
                match value {
                    #(#arms)*
                    _ => ::core::option::Option::None,
                }
            }

            /// Decodes a raw field
            ///
            /// # Panics
            ///
            /// Panics if no variant has that encoding
            pub const fn from_bits(value: #repr) -> Self {
                match Self::try_from_bits(value) {
                    ::core::option::Option::Some(this) => this,
                    ::core::option::Option::None => {
                        panic!(concat!("Unexpected encoding for `", stringify!(#enum_name), "`"))
                    }
                }
            }
        }
    })
}

//! Proc macros for the next-properties crate.
//!
//! This crate provides the `#[derive(Properties)]` macro

use std::collections::HashSet;

use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Expr, Fields, Lit, LitStr, parse_macro_input, spanned::Spanned};

/// Options parsed from a field's `#[properties(...)]` attribute.
struct FieldOptions {
    key: Option<String>,
}

impl FieldOptions {
    fn from_attrs(attrs: &[syn::Attribute]) -> syn::Result<Self> {
        let mut key = None;

        for attr in attrs {
            if attr.path().is_ident("properties") {
                if key.is_some() {
                    return Err(syn::Error::new(
                        attr.span(),
                        "a field takes a single #[properties(...)] attribute",
                    ));
                }

                attr.parse_nested_meta(|meta| {
                    if meta.path.is_ident("key") {
                        let value: Expr = meta.value()?.parse()?;
                        if let Expr::Lit(expr_lit) = &value {
                            if let Lit::Str(lit_str) = &expr_lit.lit {
                                key = Some(validate_key(lit_str)?);
                            } else {
                                return Err(syn::Error::new(
                                    expr_lit.span(),
                                    "key must be a string",
                                ));
                            }
                        } else {
                            return Err(syn::Error::new(value.span(), "key must be a literal"));
                        }
                    } else {
                        return Err(syn::Error::new(
                            meta.path.span(),
                            format!("unknown properties attribute: {:?}", meta.path.get_ident()),
                        ));
                    }
                    Ok(())
                })?;

                if key.is_none() {
                    return Err(syn::Error::new(
                        attr.span(),
                        "missing required attribute: #[properties(key = \"...\")]",
                    ));
                }
            }
        }

        Ok(Self { key })
    }
}

/// Rejects keys that could not survive a trip through a properties file.
fn validate_key(lit: &LitStr) -> syn::Result<String> {
    let key = lit.value();

    if key.is_empty() {
        return Err(syn::Error::new(lit.span(), "key must not be empty"));
    }
    if key.contains('=') {
        return Err(syn::Error::new(lit.span(), "key must not contain '='"));
    }
    if key.contains(['\n', '\r']) {
        return Err(syn::Error::new(lit.span(), "key must not contain a line break"));
    }
    if key.starts_with('#') {
        return Err(syn::Error::new(
            lit.span(),
            "key must not start with '#', it would be read back as a comment",
        ));
    }

    Ok(key)
}

/// Derive macro for the `Properties` trait.
///
/// This macro automatically:
/// - Implements the `Properties` trait with one field descriptor per
///   `#[properties(key = "...")]` field, in declaration order
/// - Registers non-generic records with `inventory` so they can be used
///   through `Decoder::decode_any` / `Encoder::encode_any`
///
/// Fields without the attribute are left out of the format entirely.
///
/// # Example
///
/// ```rust,ignore
/// use next_properties::Properties;
///
/// #[derive(Debug, Default, Properties)]
/// struct AppConfig {
///     #[properties(key = "app.name")]
///     name: String,
///     #[properties(key = "app.port")]
///     port: u16,
///     cache: Vec<u8>,
/// }
/// ```
///
/// This expands to roughly:
///
/// ```rust,ignore
/// impl next_properties::Properties for AppConfig {
///     const FIELDS: &'static [next_properties::Field<Self>] = &[
///         next_properties::Field::<Self>::new(
///             "app.name",
///             <String as next_properties::PropertyValue>::KIND,
///             |record: &Self| /* render record.name */,
///             |record: &mut Self, raw: &str| /* parse into record.name */,
///         ),
///         // ... app.port ...
///     ];
/// }
///
/// next_properties::submit_record!(AppConfig);
/// ```
#[proc_macro_derive(Properties, attributes(properties))]
pub fn derive_properties(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_properties_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_properties_impl(mut input: DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = input.ident.clone();

    let fields: Vec<&syn::Field> = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => named.named.iter().collect(),
            Fields::Unit => Vec::new(),
            Fields::Unnamed(_) => {
                return Err(syn::Error::new(
                    name.span(),
                    "Properties can only be derived for structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new(
                name.span(),
                "Properties can only be derived for structs",
            ));
        }
    };

    let mut seen = HashSet::new();
    let mut descriptors = Vec::new();

    for field in fields {
        let Some(key) = FieldOptions::from_attrs(&field.attrs)?.key else {
            continue;
        };

        if !seen.insert(key.clone()) {
            return Err(syn::Error::new(
                field.span(),
                format!("duplicate properties key: {key:?}"),
            ));
        }

        let ident = &field.ident;
        let ty = &field.ty;

        descriptors.push(quote! {
            ::next_properties::Field::<Self>::new(
                #key,
                <#ty as ::next_properties::PropertyValue>::KIND,
                |record: &Self| {
                    <#ty as ::next_properties::PropertyValue>::render_property(&record.#ident)
                },
                |record: &mut Self, raw: &str| {
                    record.#ident = <#ty as ::next_properties::PropertyValue>::parse_property(raw)?;
                    ::core::result::Result::Ok(())
                },
            )
        });
    }

    // Registration needs a concrete type, so generic records only get the trait.
    let registration = if input.generics.params.is_empty() {
        quote! {
            ::next_properties::submit_record!(#name);
        }
    } else {
        quote! {}
    };

    let type_params: Vec<syn::Ident> = input
        .generics
        .type_params()
        .map(|param| param.ident.clone())
        .collect();
    let where_clause = input.generics.make_where_clause();
    for param in type_params {
        where_clause.predicates.push(syn::parse_quote!(#param: 'static));
    }

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::next_properties::Properties for #name #ty_generics #where_clause {
            const FIELDS: &'static [::next_properties::Field<Self>] = &[
                #(#descriptors),*
            ];
        }

        #registration
    })
}

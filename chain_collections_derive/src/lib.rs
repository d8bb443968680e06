use proc_macro::TokenStream;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream}, parse_macro_input, Data, DataStruct, DeriveInput, Fields, GenericArgument, Ident, LitStr, PathArguments, Token, Type, TypePath
};

struct NodeAttribute {
    crate_path: syn::Path,
}

/// Parses the attribute in the format: `crate_path = "path::to::crate"`.
impl Parse for NodeAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let key: Ident = input.parse()?;
        if key != "crate_path" {
            return Err(syn::Error::new(key.span(), "expected attribute `crate_path`"));
        }

        let _: Token![=] = input.parse()?;
        let value: LitStr = input.parse()?;
        let path: syn::Path = value.parse()?;

        Ok(NodeAttribute { crate_path: path })
    }
}

/// Returns `H` when `ty` is spelled `Option<H>` (or a path ending in `Option<H>`).
fn option_inner(ty: &Type) -> Option<&Type> {
    let Type::Path(TypePath { qself: None, path }) = ty else {
        return None;
    };
    let segment = path.segments.last()?;
    if segment.ident != "Option" {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    if args.args.len() != 1 {
        return None;
    }
    match args.args.first()? {
        GenericArgument::Type(inner) => Some(inner),
        _ => None,
    }
}

/// Derive macro for linked list nodes.
///
/// The struct must have exactly two named fields: `next: Option<H>`, the
/// owning handle to the successor, and `data`, the payload.
#[proc_macro_derive(Node, attributes(node))]
pub fn node_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let mut crate_path = quote! { ::chain_collections };

    for attr in &input.attrs {
        if attr.path().is_ident("node") {
            match attr.parse_args::<NodeAttribute>() {
                Ok(node_attr) => {
                    let path = node_attr.crate_path;
                    crate_path = quote! { #path };
                    break;
                }
                Err(e) => return e.to_compile_error().into(),
            }
        }
    }

    let traits_path = quote! { #crate_path::linked_list::traits };

    let mut next_field = None;
    let mut data_field = None;

    if let Data::Struct(DataStruct {
        fields: Fields::Named(ref fields),
        ..
    }) = input.data
    {
        for field in fields.named.iter() {
            if let Some(ident) = &field.ident {
                match ident.to_string().as_str() {
                    "next" => next_field = Some(field.clone()),
                    "data" => data_field = Some(field.clone()),
                    _ => {
                        return syn::Error::new_spanned(
                            ident,
                            "Unexpected field name: expected 'next' or 'data'",
                        )
                        .to_compile_error()
                        .into();
                    }
                }
            }
        }
    } else {
        return syn::Error::new_spanned(
            input,
            "Node derive macro only supports structs with named fields",
        )
        .to_compile_error()
        .into();
    };

    let (next_field, data_field) = match (next_field, data_field) {
        (Some(next), Some(data)) => (next, data),
        (None, _) => {
            return syn::Error::new_spanned(struct_name, "Struct must have a field named 'next'")
                .to_compile_error()
                .into();
        }
        (_, None) => {
            return syn::Error::new_spanned(struct_name, "Struct must have a field named 'data'")
                .to_compile_error()
                .into();
        }
    };

    let handle_type = match option_inner(&next_field.ty) {
        Some(inner) => inner,
        None => {
            return syn::Error::new_spanned(&next_field.ty, "Field 'next' must be an `Option<_>`")
                .to_compile_error()
                .into();
        }
    };
    let data_type = &data_field.ty;

    let expanded = quote! {
        impl #impl_generics #traits_path::Link for #struct_name #ty_generics #where_clause {
            type Handle = #handle_type;

            #[inline]
            fn next(&self) -> Option<&Self::Handle> {
                self.next.as_ref()
            }

            #[inline]
            fn set_next(&mut self, next: Option<Self::Handle>) -> Option<Self::Handle> {
                ::core::mem::replace(&mut self.next, next)
            }
        }

        impl #impl_generics #traits_path::NodeWithData for #struct_name #ty_generics #where_clause {
            type Data = #data_type;

            #[inline]
            fn data(&self) -> &Self::Data {
                &self.data
            }

            #[inline]
            fn data_mut(&mut self) -> &mut Self::Data {
                &mut self.data
            }

            #[inline]
            fn into_data(self) -> Self::Data {
                self.data
            }
        }
    };

    TokenStream::from(expanded)
}

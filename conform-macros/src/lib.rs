use proc_macro2::{Span, TokenStream};
use proc_macro_error::{abort, abort_call_site, emit_error, proc_macro_error};
use quote::quote;
use syn::{parse_macro_input, spanned::Spanned, Attribute, Data, DeriveInput, Lit, Meta, NestedMeta};

#[proc_macro_error]
#[proc_macro_derive(Verify, attributes(verify))]
pub fn derive_verify(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    if let Data::Union(u) = &input.data {
        abort!(u.union_token, "unions are not supported by Verify");
    }

    let options = VerifyOptions::from_attrs(&input.attrs);
    derive(&input, options).into()
}

#[derive(Default)]
struct VerifyOptions {
    schema: Option<(Span, TokenStream)>,
}

impl VerifyOptions {
    fn from_attrs(attrs: &[Attribute]) -> Self {
        let mut options = VerifyOptions::default();

        for attr in attrs.iter().filter(|a| a.path.is_ident("verify")) {
            let list = match attr.parse_meta() {
                Ok(Meta::List(list)) => list,
                Ok(other) => abort!(other, r#"expected #[verify(schema = "...")]"#),
                Err(err) => abort!(err.span(), "{}", err),
            };

            for nested in list.nested {
                options.set(nested);
            }
        }

        options
    }

    fn set(&mut self, nested: NestedMeta) {
        let nv = match nested {
            NestedMeta::Meta(Meta::NameValue(nv)) => nv,
            other => abort!(other, r#"expected an option in the form of key = "value""#),
        };

        if !nv.path.is_ident("schema") {
            abort!(nv.path, "unknown option, the only option is \"schema\"");
        }

        let expr = match &nv.lit {
            Lit::Str(s) => match s.parse::<TokenStream>() {
                Ok(ts) => ts,
                Err(err) => abort!(s, "invalid schema expression: {}", err),
            },
            other => abort!(other, "the schema must be given as a string literal"),
        };

        if let Some((existing, _)) = &self.schema {
            emit_error!(*existing, "schema defined here");
            abort!(nv.path, r#"duplicate keys "schema""#);
        }

        self.schema = Some((nv.path.span(), expr));
    }
}

fn derive(input: &DeriveInput, options: VerifyOptions) -> TokenStream {
    let ident = &input.ident;
    let (impl_gen, ty_gen, where_gen) = input.generics.split_for_impl();

    let schema = match options.schema {
        Some((_, schema)) => schema,
        None => abort_call_site!(r#"a schema is required, e.g. #[verify(schema = "...")]"#),
    };

    quote! {
        impl #impl_gen ::conform::Verify for #ident #ty_gen #where_gen {
            fn verify(&self) -> ::core::result::Result<(), ::conform::errors::Error> {
                let __schema = #schema;
                ::conform::Verifier::verify_value(&__schema, self)
            }
        }
    }
}

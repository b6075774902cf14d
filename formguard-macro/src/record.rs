use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{Data, DeriveInput, Error, Fields, LitStr, Path, parse_macro_input};

/// Options from `#[validate(...)]` on the struct itself
struct ContainerArgs {
    rename_all: Option<RenameRule>,
    krate: Path,
}

#[derive(Clone, Copy)]
enum RenameRule {
    PascalCase,
    CamelCase,
}

impl RenameRule {
    fn from_lit(lit: &LitStr) -> syn::Result<Self> {
        match lit.value().as_str() {
            "PascalCase" => Ok(RenameRule::PascalCase),
            "camelCase" => Ok(RenameRule::CamelCase),
            other => Err(Error::new(
                lit.span(),
                format!(
                    "unsupported rename_all value \"{}\"\n\
                     hint: use \"PascalCase\" or \"camelCase\"",
                    other
                ),
            )),
        }
    }

    fn apply(self, ident: &str) -> String {
        let mut out = String::with_capacity(ident.len());
        let mut upper = matches!(self, RenameRule::PascalCase);
        for c in ident.trim_start_matches("r#").chars() {
            if c == '_' {
                upper = !out.is_empty();
                continue;
            }
            if upper {
                out.extend(c.to_uppercase());
                upper = false;
            } else {
                out.push(c);
            }
        }
        out
    }
}

/// Options from `#[validate(...)]` on one field
#[derive(Default)]
struct FieldArgs {
    rules: Option<LitStr>,
    rename: Option<LitStr>,
    skip: bool,
}

fn container_args(input: &DeriveInput) -> syn::Result<ContainerArgs> {
    let mut args = ContainerArgs {
        rename_all: None,
        krate: syn::parse_quote!(::formguard_validation),
    };

    for attr in input.attrs.iter().filter(|a| a.path().is_ident("validate")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename_all") {
                let lit: LitStr = meta.value()?.parse()?;
                args.rename_all = Some(RenameRule::from_lit(&lit)?);
                Ok(())
            } else if meta.path.is_ident("crate") {
                let lit: LitStr = meta.value()?.parse()?;
                args.krate = lit.parse()?;
                Ok(())
            } else {
                Err(meta.error("expected `rename_all = \"...\"` or `crate = \"...\"`"))
            }
        })?;
    }

    Ok(args)
}

fn field_args(field: &syn::Field) -> syn::Result<FieldArgs> {
    let mut args = FieldArgs::default();

    for attr in field.attrs.iter().filter(|a| a.path().is_ident("validate")) {
        // #[validate("required,email")]
        if let Ok(lit) = attr.parse_args::<LitStr>() {
            args.rules = Some(lit);
            continue;
        }

        // #[validate(rules = "...", rename = "...")] or #[validate(skip)]
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rules") {
                args.rules = Some(meta.value()?.parse()?);
                Ok(())
            } else if meta.path.is_ident("rename") {
                args.rename = Some(meta.value()?.parse()?);
                Ok(())
            } else if meta.path.is_ident("skip") {
                args.skip = true;
                Ok(())
            } else {
                Err(meta.error("expected `rules`, `rename` or `skip`"))
            }
        })?;
    }

    if args.skip && (args.rules.is_some() || args.rename.is_some()) {
        return Err(Error::new_spanned(
            field,
            "a skipped field cannot carry rules or a rename",
        ));
    }

    Ok(args)
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let Data::Struct(data) = &input.data else {
        return Err(Error::new(
            Span::call_site(),
            "Record can only be derived for structs with named fields",
        ));
    };
    let Fields::Named(named) = &data.fields else {
        return Err(Error::new_spanned(
            &data.fields,
            "Record can only be derived for structs with named fields",
        ));
    };

    let container = container_args(input)?;
    let krate = &container.krate;

    let mut entries = Vec::new();
    for field in &named.named {
        let args = field_args(field)?;
        if args.skip {
            continue;
        }

        let Some(ident) = &field.ident else {
            continue;
        };
        let ident_name = ident.to_string();
        let name = match (&args.rename, container.rename_all) {
            (Some(rename), _) => rename.value(),
            (None, Some(rule)) => rule.apply(&ident_name),
            (None, None) => ident_name.trim_start_matches("r#").to_string(),
        };
        let rules = match &args.rules {
            Some(lit) => quote!(::core::option::Option::Some(#lit)),
            None => quote!(::core::option::Option::None),
        };

        entries.push(quote! {
            #krate::Field::new(
                #name,
                #rules,
                #krate::AsFieldValue::as_field_value(&self.#ident),
            )
        });
    }

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics #krate::Record for #ident #ty_generics #where_clause {
            fn fields(&self) -> ::std::vec::Vec<#krate::Field<'_>> {
                ::std::vec![#(#entries),*]
            }
        }

        impl #impl_generics #krate::Validatable for #ident #ty_generics #where_clause {
            fn as_record(&self) -> ::core::option::Option<&dyn #krate::Record> {
                ::core::option::Option::Some(self)
            }
        }
    })
}

pub fn record_derive_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand(&input) {
        Ok(expanded) => TokenStream::from(expanded),
        Err(err) => TokenStream::from(err.to_compile_error()),
    }
}

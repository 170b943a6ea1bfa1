use crate::derive_utils::apply_derives;
use proc_macro::TokenStream;
use quote::quote;
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{Item, Result, Token, parse::Parse, parse::ParseStream, parse_macro_input};

/// #[value_object] 宏实现
/// - 支持结构体（具名或 tuple）与枚举
/// - 合并/追加派生：(Debug 可控), Clone, PartialEq, (Eq 可控), (Default 可控), Serialize, Deserialize
/// - 枚举仅在某个变体标注了 `#[default]` 时派生 Default
/// - 参数：`#[value_object(debug = true|false, eq = true|false, default = true|false)]`，默认均为 true
pub(crate) fn expand(attr: TokenStream, item: TokenStream) -> TokenStream {
    let cfg = parse_macro_input!(attr as ValueObjectAttrConfig);
    let mut input = parse_macro_input!(item as Item);

    // 组装需要的 derive 集合（struct/enum 通用）
    let mut required: Vec<syn::Path> = vec![
        syn::parse_quote!(Clone),
        syn::parse_quote!(PartialEq),
        syn::parse_quote!(::serde::Serialize),
        syn::parse_quote!(::serde::Deserialize),
    ];

    if cfg.derive_eq.unwrap_or(true) {
        required.insert(2, syn::parse_quote!(Eq));
    }

    if cfg.derive_debug.unwrap_or(true) {
        required.insert(0, syn::parse_quote!(Debug));
    }

    let derive_default = cfg.derive_default.unwrap_or(true);
    let default_path: syn::Path = syn::parse_quote!(Default);

    let (ident, mut generics) = match &mut input {
        Item::Struct(st) => {
            if derive_default {
                required.push(default_path);
            }
            apply_derives(&mut st.attrs, required);
            (st.ident.clone(), st.generics.clone())
        }
        Item::Enum(en) => {
            let has_default_variant = en
                .variants
                .iter()
                .any(|v| v.attrs.iter().any(|a| a.path().is_ident("default")));
            if derive_default && has_default_variant {
                required.push(default_path);
            }
            apply_derives(&mut en.attrs, required);
            (en.ident.clone(), en.generics.clone())
        }
        other => {
            return syn::Error::new(other.span(), "#[value_object] only supports struct or enum")
                .to_compile_error()
                .into();
        }
    };

    // 泛型值对象：派生出的 Clone/PartialEq/Debug 依赖类型参数，在 impl 上显式要求
    let self_ty: syn::Type = {
        let (_, ty_generics, _) = generics.split_for_impl();
        syn::parse_quote!(#ident #ty_generics)
    };
    if !generics.params.is_empty() {
        generics.make_where_clause().predicates.push(syn::parse_quote! {
            #self_ty: ::core::clone::Clone + ::core::cmp::PartialEq + ::core::fmt::Debug
        });
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    TokenStream::from(quote! {
        #input

        impl #impl_generics ::dddcore::value_object::ValueObject for #ident #ty_generics #where_clause {}
    })
}

// -------- parsing --------

struct ValueObjectAttrConfig {
    derive_debug: Option<bool>,
    derive_eq: Option<bool>,
    derive_default: Option<bool>,
}

impl Parse for ValueObjectAttrConfig {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut cfg = Self {
            derive_debug: None,
            derive_eq: None,
            derive_default: None,
        };

        if input.is_empty() {
            return Ok(cfg);
        }

        let pairs: Punctuated<ValueObjectAttrElem, Token![,]> =
            Punctuated::parse_terminated(input)?;

        for elem in pairs {
            let slot = match elem.kind {
                ValueObjectKey::Debug => &mut cfg.derive_debug,
                ValueObjectKey::Eq => &mut cfg.derive_eq,
                ValueObjectKey::Default => &mut cfg.derive_default,
            };
            if slot.is_some() {
                let key = &elem.key;
                return Err(syn::Error::new(
                    key.span(),
                    format!("duplicate key '{key}' in attribute"),
                ));
            }
            *slot = Some(elem.value);
        }
        Ok(cfg)
    }
}

struct ValueObjectAttrElem {
    key: syn::Ident,
    kind: ValueObjectKey,
    value: bool,
}

enum ValueObjectKey {
    Debug,
    Eq,
    Default,
}

impl Parse for ValueObjectAttrElem {
    fn parse(input: ParseStream) -> Result<Self> {
        let key: syn::Ident = input.parse()?;
        let _eq: Token![=] = input.parse()?;
        let expr: syn::Expr = input.parse()?;
        let value = match expr {
            syn::Expr::Lit(syn::ExprLit {
                lit: syn::Lit::Bool(b),
                ..
            }) => b.value(),
            other => {
                return Err(syn::Error::new(
                    other.span(),
                    format!("expected boolean literal for '{key}'"),
                ));
            }
        };

        let kind = if key == "debug" {
            ValueObjectKey::Debug
        } else if key == "eq" {
            ValueObjectKey::Eq
        } else if key == "default" {
            ValueObjectKey::Default
        } else {
            return Err(syn::Error::new(
                key.span(),
                "unknown key in attribute; expected 'debug', 'eq' or 'default'",
            ));
        };
        Ok(Self { key, kind, value })
    }
}

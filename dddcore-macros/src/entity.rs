use crate::derive_utils::apply_derives_excluding;
use crate::field_utils::ensure_leading_field;
use proc_macro::TokenStream;
use quote::quote;
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{Item, Result, Token, Type, parse::Parse, parse::ParseStream, parse_macro_input};

#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum Kind {
    Entity,
    AggregateRoot,
}

impl Kind {
    fn attr_name(self) -> &'static str {
        match self {
            Kind::Entity => "#[entity]",
            Kind::AggregateRoot => "#[aggregate_root]",
        }
    }
}

/// #[entity] / #[aggregate_root] 宏实现
/// - 确保 `id: Identity` 字段存在且位于最前
/// - 相等与哈希仅比较标识，因此移除用户声明的 PartialEq/Eq/Hash 派生
/// - 参数：`debug = true|false`，默认 true
pub(crate) fn expand(attr: TokenStream, item: TokenStream, kind: Kind) -> TokenStream {
    let cfg = parse_macro_input!(attr as EntityAttrConfig);
    let input = parse_macro_input!(item as Item);

    let mut st = match input {
        Item::Struct(s) => s,
        other => {
            let span = match &other {
                Item::Enum(e) => e.ident.span(),
                Item::Union(u) => u.ident.span(),
                other => other.span(),
            };
            return syn::Error::new(span, format!("{} only on struct", kind.attr_name()))
                .to_compile_error()
                .into();
        }
    };

    // 仅支持具名字段结构体
    let fields_named = match &mut st.fields {
        syn::Fields::Named(f) => f,
        _ => {
            return syn::Error::new(st.ident.span(), "only supports named-field struct")
                .to_compile_error()
                .into();
        }
    };

    let identity_ty: Type = syn::parse_quote! { ::dddcore::identity::Identity };
    ensure_leading_field(fields_named, "id", &identity_ty);

    // 除标识外的字段逐一取默认值，不经由整体 Default，避免多生成一次标识
    let rest: Vec<syn::Ident> = fields_named
        .named
        .iter()
        .filter_map(|f| f.ident.clone())
        .filter(|ident| ident != "id")
        .collect();

    let mut required: Vec<syn::Path> = vec![syn::parse_quote!(Clone), syn::parse_quote!(Default)];
    if cfg.derive_debug.unwrap_or(true) {
        required.insert(0, syn::parse_quote!(Debug));
    }
    apply_derives_excluding(&mut st.attrs, required, &["PartialEq", "Eq", "Hash"]);

    let ident = &st.ident;
    let (impl_generics, ty_generics, where_clause) = st.generics.split_for_impl();

    let aggregate_impl = match kind {
        Kind::Entity => quote! {},
        Kind::AggregateRoot => quote! {
            impl #impl_generics ::dddcore::aggregate_root::AggregateRoot for #ident #ty_generics #where_clause {}
        },
    };

    let expanded = quote! {
        #st

        impl #impl_generics ::dddcore::entity::Entity for #ident #ty_generics #where_clause {
            fn with_identity(id: ::dddcore::identity::Identity) -> Self {
                Self { id, #(#rest: ::core::default::Default::default()),* }
            }

            fn id(&self) -> &::dddcore::identity::Identity { &self.id }
        }

        impl #impl_generics ::core::cmp::PartialEq for #ident #ty_generics #where_clause {
            fn eq(&self, other: &Self) -> bool { self.id == other.id }
        }

        impl #impl_generics ::core::cmp::Eq for #ident #ty_generics #where_clause {}

        impl #impl_generics ::core::hash::Hash for #ident #ty_generics #where_clause {
            fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                ::core::hash::Hash::hash(&self.id, state)
            }
        }

        #aggregate_impl
    };

    TokenStream::from(expanded)
}

// -------- parsing --------

struct EntityAttrConfig {
    derive_debug: Option<bool>,
}

impl Parse for EntityAttrConfig {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut derive_debug: Option<bool> = None;

        if input.is_empty() {
            return Ok(Self { derive_debug });
        }

        let elems: Punctuated<EntityAttrElem, Token![,]> =
            Punctuated::<EntityAttrElem, Token![,]>::parse_terminated(input)?;

        for elem in elems.into_iter() {
            match elem {
                EntityAttrElem::Debug { key, value } => {
                    if derive_debug.is_some() {
                        return Err(syn::Error::new(
                            key.span(),
                            "duplicate key 'debug' in attribute",
                        ));
                    }
                    derive_debug = Some(value);
                }
            }
        }

        Ok(Self { derive_debug })
    }
}

enum EntityAttrElem {
    Debug { key: syn::Ident, value: bool },
}

impl Parse for EntityAttrElem {
    fn parse(input: ParseStream) -> Result<Self> {
        let key: syn::Ident = input.parse()?;
        if key == "debug" {
            let _eq: Token![=] = input.parse()?;
            let lit: syn::LitBool = input.parse()?;
            Ok(EntityAttrElem::Debug {
                key,
                value: lit.value(),
            })
        } else {
            Err(syn::Error::new(
                key.span(),
                "unknown key in attribute; expected 'debug'",
            ))
        }
    }
}

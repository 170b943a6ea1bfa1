use crate::derive_utils::apply_derives;
use crate::field_utils::ensure_leading_field;
use proc_macro::TokenStream;
use quote::quote;
use syn::spanned::Spanned;
use syn::{Item, Result, Token, Type, parse::Parse, parse::ParseStream, parse_macro_input};

const TIMESTAMP_FIELD: &str = "occurred_at";

/// #[domain_event] 宏实现
/// - 单元结构体转换为空的具名字段结构体
/// - 插入 `occurred_at` 字段，事件构造后时间戳不再变化（不生成 setter）
/// - 合并派生：Debug、Clone、PartialEq
pub(crate) fn expand(attr: TokenStream, item: TokenStream) -> TokenStream {
    let cfg = parse_macro_input!(attr as EventAttrConfig);
    let input = parse_macro_input!(item as Item);

    let mut st = match input {
        Item::Struct(s) => s,
        other => {
            let span = match &other {
                Item::Enum(e) => e.ident.span(),
                other => other.span(),
            };
            return syn::Error::new(span, "#[domain_event] only on struct")
                .to_compile_error()
                .into();
        }
    };

    if matches!(st.fields, syn::Fields::Unit) {
        st.fields = syn::Fields::Named(syn::parse_quote!({}));
        st.semi_token = None;
    }

    let fields_named = match &mut st.fields {
        syn::Fields::Named(f) => f,
        _ => {
            return syn::Error::new(
                st.ident.span(),
                "#[domain_event] supports only named-field or unit struct",
            )
            .to_compile_error()
            .into();
        }
    };

    let timestamp_ty: Type = syn::parse_quote! { ::dddcore::clock::Timestamp };
    ensure_leading_field(fields_named, TIMESTAMP_FIELD, &timestamp_ty);

    // 构造函数参数：除时间戳外的全部字段，保持声明顺序
    let (names, tys): (Vec<syn::Ident>, Vec<Type>) = fields_named
        .named
        .iter()
        .filter_map(|f| {
            let ident = f.ident.clone()?;
            (ident != TIMESTAMP_FIELD).then(|| (ident, f.ty.clone()))
        })
        .unzip();

    apply_derives(
        &mut st.attrs,
        vec![
            syn::parse_quote!(Debug),
            syn::parse_quote!(Clone),
            syn::parse_quote!(PartialEq),
        ],
    );

    let ident = &st.ident;
    let vis = &st.vis;
    let name = cfg
        .name
        .unwrap_or_else(|| syn::LitStr::new(&ident.to_string(), ident.span()));
    let (impl_generics, ty_generics, where_clause) = st.generics.split_for_impl();

    // 构造函数自身的参数使用 mixed_site 卫生标识，与用户字段名互不冲突
    let clock = syn::Ident::new("__clock", proc_macro2::Span::mixed_site());
    let clock_ty = syn::Ident::new("__Clock", proc_macro2::Span::call_site());
    let timestamp = syn::Ident::new("__occurred_at", proc_macro2::Span::mixed_site());
    let timestamp_field = syn::Ident::new(TIMESTAMP_FIELD, proc_macro2::Span::call_site());

    let expanded = quote! {
        #st

        impl #impl_generics #ident #ty_generics #where_clause {
            /// 以系统时钟的当前时间创建事件
            #vis fn new(#(#names: #tys),*) -> Self {
                Self::with_clock(&::dddcore::clock::SystemClock, #(#names),*)
            }

            /// 以注入时钟的读数创建事件，时钟只读取一次
            #vis fn with_clock<#clock_ty>(#clock: &#clock_ty, #(#names: #tys),*) -> Self
            where
                #clock_ty: ::dddcore::clock::Clock + ?Sized,
            {
                Self::with_timestamp(::dddcore::clock::Clock::now(#clock), #(#names),*)
            }

            /// 以显式给定的时间戳创建事件
            #vis fn with_timestamp(#timestamp: ::dddcore::clock::Timestamp, #(#names: #tys),*) -> Self {
                Self { #timestamp_field: #timestamp, #(#names),* }
            }
        }

        impl #impl_generics ::dddcore::domain_event::DomainEvent for #ident #ty_generics #where_clause {
            const NAME: &'static str = #name;

            fn timestamp_utc(&self) -> ::dddcore::clock::Timestamp {
                self.#timestamp_field
            }
        }
    };

    TokenStream::from(expanded)
}

// -------- parsing --------

// 解析 domain_event 宏键值参数：name = "<literal>"
struct EventAttrConfig {
    name: Option<syn::LitStr>,
}

impl Parse for EventAttrConfig {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut name: Option<syn::LitStr> = None;

        while !input.is_empty() {
            let key: syn::Ident = input.parse()?;
            let _eq: Token![=] = input.parse()?;
            if key == "name" {
                if name.is_some() {
                    return Err(syn::Error::new(
                        key.span(),
                        "duplicate key 'name' in attribute",
                    ));
                }
                name = Some(input.parse()?);
            } else {
                return Err(syn::Error::new(
                    key.span(),
                    "unknown key; expected 'name'",
                ));
            }

            if input.is_empty() {
                break;
            }
            let _comma: Token![,] = input.parse()?;
        }

        Ok(Self { name })
    }
}

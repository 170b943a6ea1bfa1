use quote::ToTokens;
use syn::{Attribute, Token};

// 提取非 derive 属性与已有 derive 列表
pub(crate) fn split_derives(attrs: &[Attribute]) -> (Vec<Attribute>, Vec<syn::Path>) {
    let mut retained = Vec::new();
    let mut existing = Vec::new();
    for attr in attrs.iter() {
        if attr.path().is_ident("derive") {
            if let Ok(list) = attr.parse_args_with(
                syn::punctuated::Punctuated::<syn::Path, Token![,]>::parse_terminated,
            ) {
                existing.extend(list);
            }
        } else {
            retained.push(attr.clone());
        }
    }
    (retained, existing)
}

// 合并默认与已有 derive（去重，优先保留 required；excluded 中的派生被丢弃）
pub(crate) fn merge_derives(
    existing: Vec<syn::Path>,
    required: Vec<syn::Path>,
    excluded: &[&str],
) -> Attribute {
    let mut seen = std::collections::HashSet::<String>::new();
    let mut final_list: Vec<syn::Path> = Vec::new();
    for p in required.into_iter().chain(existing) {
        let key = derive_key(&p);
        if excluded.contains(&key.as_str()) {
            continue;
        }
        if seen.insert(key) {
            final_list.push(p);
        }
    }
    syn::parse_quote!(#[derive(#(#final_list),*)])
}

// 归一化 derive 的 key，避免 Serialize/serde::Serialize、PartialEq/core::cmp::PartialEq 重复
pub(crate) fn derive_key(p: &syn::Path) -> String {
    if let Some(last) = p.segments.last() {
        let last_ident = last.ident.to_string();
        match last_ident.as_str() {
            "Serialize" | "Deserialize" => format!("serde::{}", last_ident),
            _ => last_ident,
        }
    } else {
        p.to_token_stream().to_string()
    }
}

// 直接在 attrs 上应用默认派生合并
pub(crate) fn apply_derives(attrs: &mut Vec<Attribute>, required: Vec<syn::Path>) {
    apply_derives_excluding(attrs, required, &[]);
}

// 合并派生并移除由宏手写实现的 trait
pub(crate) fn apply_derives_excluding(
    attrs: &mut Vec<Attribute>,
    required: Vec<syn::Path>,
    excluded: &[&str],
) {
    let (retained, existing) = split_derives(attrs);
    let merged = merge_derives(existing, required, excluded);
    *attrs = std::iter::once(merged).chain(retained).collect();
}

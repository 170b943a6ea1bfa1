use syn::{Field, FieldsNamed, Token, Type, punctuated::Punctuated};

/// 确保具名字段结构体包含指定字段并位于最前
/// - 若已存在则复用原字段定义（保留其属性与可见性）
/// - 若缺失则以给定类型新建私有字段
/// - 其余字段保持原始相对顺序
pub(crate) fn ensure_leading_field(fields_named: &mut FieldsNamed, name: &str, ty: &Type) {
    let old_named = std::mem::take(&mut fields_named.named);
    let mut new_named: Punctuated<Field, Token![,]> = Punctuated::new();

    let is_target = |f: &Field| f.ident.as_ref().map(|i| i == name).unwrap_or(false);

    match old_named.iter().find(|f| is_target(f)) {
        Some(existing) => new_named.push(existing.clone()),
        None => {
            let ident = syn::Ident::new(name, proc_macro2::Span::call_site());
            new_named.push(syn::parse_quote! { #ident: #ty });
        }
    }

    for f in old_named.into_iter().filter(|f| !is_target(f)) {
        new_named.push(f);
    }

    fields_named.named = new_named;
}

// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Getter and setter generation.
//!
//! ```rust,ignore
//! // fluent = true
//! order.set_customer("acme").set_amount(12);
//!
//! // fluent = false
//! order.set_customer("acme");
//! order.set_amount(12);
//! ```

use proc_macro2::TokenStream;
use quote::quote;

use super::{parse::ModelDef, policy::MemberPlan};

/// Generate one getter and one setter per declared field.
pub fn generate(model: &ModelDef, plan: &MemberPlan<'_>) -> TokenStream {
    let ident = &model.ident;
    let fluent = plan.metadata.fluent;

    let methods = plan.accessors.iter().map(|accessor| {
        let field = accessor.field.name();
        let ty = accessor.field.ty();
        let getter = &accessor.getter;
        let setter = &accessor.setter;
        let get_doc = format!("Value of `{}`.", accessor.field.name_str());
        let set_doc = format!("Set `{}`.", accessor.field.name_str());

        let setter_fn = if fluent {
            quote! {
                #[doc = #set_doc]
                pub fn #setter(&mut self, value: impl ::core::convert::Into<#ty>) -> &mut Self {
                    self.#field = value.into();
                    self
                }
            }
        } else {
            quote! {
                #[doc = #set_doc]
                pub fn #setter(&mut self, value: impl ::core::convert::Into<#ty>) {
                    self.#field = value.into();
                }
            }
        };

        quote! {
            #[doc = #get_doc]
            #[must_use]
            pub fn #getter(&self) -> &#ty {
                &self.#field
            }

            #setter_fn
        }
    });

    quote! {
        impl #ident {
            #(#methods)*
        }
    }
}

#[cfg(test)]
mod tests {
    use syn::DeriveInput;

    use super::*;
    use crate::model::{naming::WordTableizer, resolve::resolve};

    fn expand(input: DeriveInput) -> String {
        let model = ModelDef::from_derive_input(&input).unwrap();
        let metadata = resolve(
            &model.name_str(),
            &model.declaration,
            &model.fields,
            &WordTableizer
        )
        .unwrap();
        let plan = MemberPlan::derive(&metadata, &model.fields).unwrap();
        generate(&model, &plan).to_string()
    }

    #[test]
    fn fluent_setters_return_receiver() {
        let output = expand(syn::parse_quote! {
            pub struct Order {
                id: Option<i64>,
                customer: String,
            }
        });
        assert!(output.contains("pub fn id (& self) -> & Option < i64 >"));
        assert!(output.contains("pub fn set_customer (& mut self , value : impl :: core :: convert :: Into < String >) -> & mut Self"));
    }

    #[test]
    fn plain_setters_return_nothing() {
        let output = expand(syn::parse_quote! {
            #[domain_model(fluent = false)]
            pub struct Order {
                id: i64,
            }
        });
        assert!(output.contains("pub fn set_id"));
        assert!(!output.contains("-> & mut Self"));
    }

    #[test]
    fn transient_fields_get_accessors() {
        let output = expand(syn::parse_quote! {
            pub struct Order {
                id: i64,
                #[column(transient)]
                cache: Vec<u8>,
            }
        });
        assert!(output.contains("pub fn cache"));
        assert!(output.contains("pub fn set_cache"));
    }
}

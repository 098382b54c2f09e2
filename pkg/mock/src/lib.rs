//! Procedural macros for generating mock implementations.
//!
//! # async_client
//!
//! Generates a mock implementation for an async client trait, e.g. the
//! transport a session store talks to.
//!
//! Use `#[cfg_attr(test, mock::async_client)]` before `#[async_trait]` to
//! generate the mock only during test compilation:
//!
//! ```ignore
//! use async_trait::async_trait;
//!
//! #[cfg_attr(test, mock::async_client)]
//! #[async_trait]
//! pub trait Transport: Send + Sync + 'static {
//!     async fn login(&self, credentials: &Credentials) -> Result<User, Error>;
//!     async fn logout(&self) -> Result<(), Error>;
//! }
//!
//! // Generates:
//! // pub struct MockTransport {
//! //     pub login: Mutex<Option<Result<User, Error>>>,
//! //     pub login_call_count: AtomicUsize,
//! //     pub login_call_args: std::sync::Mutex<Vec<(Credentials,)>>,
//! //     pub logout: Mutex<Option<Result<(), Error>>>,
//! //     pub logout_call_count: AtomicUsize,
//! //     pub logout_call_args: std::sync::Mutex<Vec<()>>,
//! // }
//! // impl Default for MockTransport { ... }
//! // #[async_trait] impl Transport for MockTransport { ... }
//! ```
//!
//! Every canned result is handed out once. Calling a method that has no
//! result configured panics, which makes "must not be called" assertions free.
//!
//! ## Checking calls in tests
//!
//! ```ignore
//! assert_eq!(mock.logout_calls(), 1);
//! assert_eq!(mock.login_args(), vec![(credentials,)]);
//! ```

use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{FnArg, ItemTrait, Pat, ReturnType, TraitItem, Type, parse_macro_input};

/// Generates a mock implementation for an async trait.
#[proc_macro_attribute]
pub fn async_client(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemTrait);
    let trait_name = &input.ident;
    let mock_name = format_ident!("Mock{}", trait_name);
    let vis = &input.vis;

    let mut field_definitions = Vec::new();
    let mut default_fields = Vec::new();
    let mut impl_methods = Vec::new();
    let mut accessor_methods = Vec::new();

    for item in &input.items {
        let TraitItem::Fn(method) = item else {
            continue;
        };

        let method_name = &method.sig.ident;
        let call_count_field = format_ident!("{}_call_count", method_name);
        let call_count_method = format_ident!("{}_calls", method_name);
        let call_args_field = format_ident!("{}_call_args", method_name);
        let call_args_method = format_ident!("{}_args", method_name);

        let return_type = match &method.sig.output {
            ReturnType::Default => quote! { () },
            ReturnType::Type(_, ty) => quote! { #ty },
        };

        let mut params = Vec::new();
        let mut owned_types = Vec::new();
        let mut owned_values = Vec::new();
        for arg in &method.sig.inputs {
            let FnArg::Typed(pat_type) = arg else {
                continue;
            };
            let Pat::Ident(pat_ident) = pat_type.pat.as_ref() else {
                panic!("mock::async_client only supports plain identifiers as arguments");
            };
            let name = &pat_ident.ident;
            let ty = &pat_type.ty;
            params.push(quote! { #name: #ty });

            match ty.as_ref() {
                Type::Reference(reference) => {
                    let inner = &reference.elem;
                    owned_types.push(quote! { <#inner as ::std::borrow::ToOwned>::Owned });
                    owned_values.push(quote! { ::std::borrow::ToOwned::to_owned(#name) });
                }
                other => {
                    owned_types.push(quote! { #other });
                    owned_values.push(quote! { ::std::clone::Clone::clone(&#name) });
                }
            }
        }
        let args_type = quote! { (#(#owned_types,)*) };
        let args_value = quote! { (#(#owned_values,)*) };

        field_definitions.push(quote! {
            pub #method_name: ::tokio::sync::Mutex<::std::option::Option<#return_type>>
        });
        field_definitions.push(quote! {
            pub #call_count_field: ::std::sync::atomic::AtomicUsize
        });
        field_definitions.push(quote! {
            pub #call_args_field: ::std::sync::Mutex<::std::vec::Vec<#args_type>>
        });

        default_fields.push(quote! {
            #method_name: ::tokio::sync::Mutex::new(::std::option::Option::None)
        });
        default_fields.push(quote! {
            #call_count_field: ::std::sync::atomic::AtomicUsize::new(0)
        });
        default_fields.push(quote! {
            #call_args_field: ::std::sync::Mutex::new(::std::vec::Vec::new())
        });

        accessor_methods.push(quote! {
            pub fn #call_count_method(&self) -> usize {
                self.#call_count_field.load(::std::sync::atomic::Ordering::SeqCst)
            }

            pub fn #call_args_method(&self) -> ::std::vec::Vec<#args_type> {
                self.#call_args_field.lock().unwrap().clone()
            }
        });

        impl_methods.push(quote! {
            async fn #method_name(&self, #(#params),*) -> #return_type {
                self.#call_count_field.fetch_add(1, ::std::sync::atomic::Ordering::SeqCst);
                self.#call_args_field.lock().unwrap().push(#args_value);
                self.#method_name
                    .lock()
                    .await
                    .take()
                    .expect(concat!("no result configured for ", stringify!(#method_name)))
            }
        });
    }

    let expanded = quote! {
        #input

        #vis struct #mock_name {
            #(#field_definitions),*
        }

        impl ::std::default::Default for #mock_name {
            fn default() -> Self {
                Self {
                    #(#default_fields),*
                }
            }
        }

        impl #mock_name {
            #(#accessor_methods)*
        }

        #[::async_trait::async_trait]
        impl #trait_name for #mock_name {
            #(#impl_methods)*
        }
    };

    TokenStream::from(expanded)
}

use convert_case::{Case, Casing};
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

/// Generate the boilerplate shared by every color model: derives, a getter for
/// each channel and the `Tagged` implementation that emits the channels as a
/// component vector.
///
/// The kind emitted by `to_components` defaults to the model's own kind and
/// can be overridden with `#[tag(Kind)]` on the struct.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if input.fields.is_empty() || input.fields.len() > 4 {
        return quote! {
            compile_error!("Models must have between 1 and 4 fields, one for each channel of the color.");
        }
        .into();
    }

    if !input.generics.params.is_empty() {
        return quote! {
            compile_error!("Models can not be generic.");
        }
        .into();
    }

    let mut tag = None;
    let mut attrs = Vec::with_capacity(input.attrs.len());
    for attr in input.attrs.drain(..) {
        if attr.path().is_ident("tag") {
            match attr.parse_args::<syn::Ident>() {
                Ok(ident) => tag = Some(ident),
                Err(err) => return err.to_compile_error().into(),
            }
        } else {
            attrs.push(attr);
        }
    }
    input.attrs = attrs;
    input
        .attrs
        .push(syn::parse_quote!(#[derive(Clone, Copy, Debug, PartialEq)]));

    let syn::Fields::Named(ref mut named) = input.fields else {
        return quote! {
            compile_error!("Model channels must be named fields.");
        }
        .into();
    };

    // Channels are only ever set by the validating constructors.
    named.named.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Inherited;
    });

    let getters = named.named.iter().map(getter).collect::<Vec<_>>();

    let field_names = named
        .named
        .iter()
        .map(|f| f.ident.clone())
        .collect::<Vec<_>>();

    let struct_name = input.ident.clone();
    let name = struct_name.to_string().to_case(Case::Flat);
    let tag = tag.unwrap_or_else(|| struct_name.clone());

    let model_impl = quote! {
        impl #struct_name {
            #(#getters)*
        }

        impl crate::models::Tagged for #struct_name {
            const KIND: crate::ModelKind = crate::ModelKind::#struct_name;
            const NAME: &'static str = #name;

            fn to_components(&self) -> crate::Components {
                crate::Components::new(
                    crate::ModelKind::#tag,
                    [#(crate::Channel::from(self.#field_names)),*],
                )
            }
        }
    };

    quote! {
        #input
        #model_impl
    }
    .into()
}

/// A getter returning a copy of the channel, carrying over the field's docs.
fn getter(field: &syn::Field) -> TokenStream2 {
    let ident = &field.ident;
    let ty = &field.ty;
    let docs = field.attrs.iter().filter(|a| a.path().is_ident("doc"));
    quote! {
        #(#docs)*
        #[inline]
        pub fn #ident(&self) -> #ty {
            self.#ident
        }
    }
}

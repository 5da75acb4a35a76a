pub mod gh_proxy;

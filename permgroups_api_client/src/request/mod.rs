use std::borrow::Borrow;

use get::GetRequestBuilder;
use url::Url;

use crate::{server::ApiServer, HttpClient};

pub(crate) mod get;


pub(crate) struct RequestBuilder;

impl RequestBuilder {
    pub(crate) fn get<'c, HC>(client: &'c HC) -> GetRequestBuilder<'c, HC, false>
    where
        HC: HttpClient,
    {
        GetRequestBuilder::<'c, HC, false>::new(client)
    }
}


/// Query parameters are form-encoded, in the order given.
fn build_request_url_with_parameters<P, K, V>(
    server: &ApiServer,
    endpoint: &str,
    parameters: P,
) -> Result<Url, url::ParseError>
where
    P: IntoIterator,
    P::Item: Borrow<(K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    if !endpoint.starts_with('/') {
        Url::parse_with_params(
            &format!("{}/{}", server.base_url(), endpoint),
            parameters,
        )
    } else {
        Url::parse_with_params(
            &format!("{}{}", server.base_url(), endpoint),
            parameters,
        )
    }
}



#[cfg(test)]
mod test {
    use super::*;
    use crate::server::ApiServerOptions;

    #[test]
    fn joins_endpoint_with_and_without_leading_slash() {
        let server = ApiServer::new("api.example.com", ApiServerOptions::default());

        let with_slash =
            build_request_url_with_parameters(&server, "/accounts/a1", [("depth", "2")]).unwrap();
        let without_slash =
            build_request_url_with_parameters(&server, "accounts/a1", [("depth", "2")]).unwrap();

        assert_eq!(
            with_slash.as_str(),
            "https://api.example.com/client/v4/accounts/a1?depth=2"
        );
        assert_eq!(with_slash, without_slash);
    }

    #[test]
    fn encodes_query_parameters_in_order() {
        let server = ApiServer::new("api.example.com", ApiServerOptions::default());

        let url = build_request_url_with_parameters(
            &server,
            "/accounts/a1/iam/permission_groups",
            [("name", "Read & Write/Admin"), ("depth", "2")],
        )
        .unwrap();

        assert_eq!(
            url.query(),
            Some("name=Read+%26+Write%2FAdmin&depth=2")
        );
    }
}

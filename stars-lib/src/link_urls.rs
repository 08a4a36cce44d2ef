use crate::error::StarsError;
use crate::result::StarsResult;
use anyhow::anyhow;
use reqwest::header::LINK;
use reqwest::{Response, Url};
use std::collections::HashMap;

/// Pagination relations advertised by the `Link` response header.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct LinkUrls {
    pub(crate) next_url: Option<Url>,
    pub(crate) last_url: Option<Url>,
}

impl LinkUrls {
    pub(crate) fn from_response(response: &Response) -> StarsResult<LinkUrls> {
        let Some(link_header) = response.headers().get(LINK) else {
            return Ok(LinkUrls::default());
        };

        let links = Self::parse_link_header(
            link_header
                .to_str()
                .map_err(|e| StarsError::Other(anyhow!(e)))?,
        );

        Ok(LinkUrls {
            next_url: Self::get_link_url(&links, "next")?,
            last_url: Self::get_link_url(&links, "last")?,
        })
    }

    /// Value of the `page` query parameter of the `last` relation, if any.
    pub(crate) fn last_page(&self) -> Option<usize> {
        self.last_url.as_ref().and_then(|url| {
            url.query_pairs()
                .find(|(n, _)| n == "page")
                .and_then(|(_, v)| v.parse::<usize>().ok())
        })
    }

    fn parse_link_header(s: &str) -> HashMap<String, String> {
        fn parse_url_part(s: &str) -> Option<String> {
            s.strip_prefix('<')
                .and_then(|s0| s0.strip_suffix('>'))
                .map(|s1| s1.to_string())
        }

        fn parse_rel_part(s: &str) -> Option<String> {
            s.split(';')
                .map(str::trim)
                .find_map(|p| p.strip_prefix("rel="))
                .map(|r| r.trim_matches('"').to_string())
        }

        s.split(',')
            .filter_map(|part| {
                part.split_once(';').and_then(|(u, r)| {
                    parse_url_part(u.trim())
                        .and_then(|u0| parse_rel_part(r.trim()).map(|r0| (r0, u0)))
                })
            })
            .collect::<HashMap<_, _>>()
    }

    fn get_link_url(links: &HashMap<String, String>, k: &str) -> StarsResult<Option<Url>> {
        let Some(s) = links.get(k) else {
            return Ok(None);
        };

        Ok(Some(
            s.parse::<Url>()
                .map_err(|e| StarsError::Other(anyhow!(e).context(format!("bad {k} link"))))?,
        ))
    }
}

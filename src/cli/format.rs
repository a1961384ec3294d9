use std::fmt::Write;

use crate::core::provider::RecordSet;
use crate::core::record::DNSRecord;

pub const HELP: &str = "Commands:
namedotcom <username> <token>: Login to name.com

list <domain>: List records for domain
put <domain> <host> <type> <answer> <ttl>: Put dns record (uses host/type as key)
delete <domain> <id>: Delete dns record

help: print help
exit: exit dino
";

const HEADER: &str = "ID           Type   TTL   Host                           Answer\n";

pub fn format_records(records: &[DNSRecord]) -> String {
    let mut out = String::from(HEADER);
    for r in records {
        // Writing into a String cannot fail.
        let _ = writeln!(
            out,
            "{:<12} {:<6} {:<5} {:<30} {}",
            r.id,
            r.record_type.as_str(),
            r.ttl,
            r.host,
            r.answer
        );
    }
    out
}

/// Record table followed by a note when some records could not be shown.
pub fn format_record_set(set: &RecordSet) -> String {
    let mut out = format_records(&set.records);
    if set.unsupported > 0 {
        let _ = writeln!(
            out,
            "({} record(s) with unsupported types not shown)",
            set.unsupported
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::record::DNSRecordType;

    #[test]
    fn test_format_empty() {
        assert_eq!(format_records(&[]), HEADER);
    }

    #[test]
    fn test_format_rows_are_aligned() {
        let mut rec = DNSRecord::new("example.com", "www", DNSRecordType::A, "1.2.3.4", 300);
        rec.id = "42".into();
        let out = format_records(&[rec]);
        let row = out.lines().nth(1).unwrap();
        assert_eq!(
            row,
            "42           A      300   www                            1.2.3.4"
        );
        let header = out.lines().next().unwrap();
        assert_eq!(header.find("Type"), row.find('A'));
        assert_eq!(header.find("Answer"), row.find("1.2.3.4"));
    }

    #[test]
    fn test_format_record_set_notes_unsupported() {
        let rec = DNSRecord::new("example.com", "", DNSRecordType::NS, "ns1.name.com", 3600);
        let complete = RecordSet {
            records: vec![rec.clone()],
            unsupported: 0,
        };
        assert_eq!(format_record_set(&complete), format_records(&complete.records));

        let partial = RecordSet {
            records: vec![rec],
            unsupported: 2,
        };
        let out = format_record_set(&partial);
        assert_eq!(out.lines().count(), 3);
        assert!(out.ends_with("(2 record(s) with unsupported types not shown)\n"));
    }
}

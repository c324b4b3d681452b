//! zt-demo - a test program showing passing and failing claims.
//!
//! Run without arguments to execute every case, with `-v` to trace case
//! names, or with `-l` to list them.

use std::process::ExitCode;
use zt::{
    CaseResult, Test, Visitor, cmp_bool, cmp_int, cmp_rune, cmp_str, cmp_uint, is_false,
    is_true, not_null, visit_case, visit_suite,
};

static USERS: [(&str, u32); 2] = [("root", 0), ("nobody", 65534)];

fn find_user(name: &str) -> Option<&'static (&'static str, u32)> {
    USERS.iter().find(|(user, _)| *user == name)
}

fn passing_test(t: &mut Test<'_>) -> CaseResult {
    t.check(&is_true!(2 + 2 == 4));
    t.check(&is_false!(2 + 2 == 5));
    t.check(&cmp_int!(2 + 2, ==, 4));
    t.check(&cmp_bool!(false, ==, false));
    Ok(())
}

fn root_user_test(t: &mut Test<'_>) -> CaseResult {
    let user = find_user("root");
    t.assert(&not_null!(user))?;
    let Some(&(name, uid)) = user else {
        return Ok(());
    };
    t.check(&cmp_str!(name, ==, "root"));
    t.check(&cmp_uint!(uid, ==, 0));
    t.check(&cmp_rune!(name.as_bytes()[0], ==, b'r'));
    Ok(())
}

fn failing_test(t: &mut Test<'_>) -> CaseResult {
    t.check(&is_true!(2 + 2 != 4));
    t.check(&is_false!(2 + 2 != 5));
    t.check(&cmp_int!(2 + 2, ==, 5));
    t.check(&cmp_bool!(false, ==, true));
    Ok(())
}

fn badly_failing_test(t: &mut Test<'_>) -> CaseResult {
    t.assert(&cmp_int!(0, ==, -1))?;
    std::process::abort();
}

fn passing_suite(v: &mut dyn Visitor) {
    visit_case!(v, passing_test);
    visit_case!(v, root_user_test);
}

fn test_suite(v: &mut dyn Visitor) {
    visit_suite!(v, passing_suite);
    visit_case!(v, failing_test);
    visit_case!(v, badly_failing_test);
}

fn main() -> ExitCode {
    zt::main(test_suite)
}

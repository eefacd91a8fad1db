//! Java sources used across tests.

#![allow(dead_code)]

/// Zero parameters, returning a value, with a throws clause after the marker.
pub const CALLABLE_RETURNING: &str = "\
Future<Integer> future = es.submit(new Callable<Integer>() {
\t\t\tpublic Integer call()/* => */throws Exception {
\t\t\t\treturn 1 + 4 + 2;
\t\t\t}
\t\t});";

/// Two parameters, returning a value.
pub const COMPARATOR: &str = "\
Arrays.sort(array, new Comparator<Object>() {
\tpublic int compare(Object o1, Object o2)/* => */{
\t\treturn o1.hashCode() - o2.hashCode();
\t}
});";

/// Zero parameters, empty body.
pub const EMPTY_RUNNABLE: &str = "\
Runnable idle = new Runnable() {
    public void run()/* => */{}
};";

/// One parameter, single statement without a value.
pub const CONSUMER_STATEMENT: &str = "\
Consumer<String> print = new Consumer<String>() {
    public void accept(String line)/* => */{
        System.out.println(line);
    }
};";

/// Several statements, one of them a loop; not a call argument.
pub const CONSUMER_LOOP: &str = "\
Consumer<String> split = new Consumer<String>() {
    public void accept(String line)/* => */{
        for (String part : line.split(\",\")) {
            emit(part);
        }
        flush();
    }
};";

/// Block body as the only argument of a call.
pub const CLAUSE_ARGUMENT: &str = "\
execute(new Fun1() {
\tpublic void get(Map<String, List<List<String>>> it, int times)/* => */{
\t\tif (times > 0) {
\t\t\tit.toString();
\t\t\tArrays.asList((Object) null);
\t\t}
\t}
});";

/// Line marker form with a block body.
pub const LINE_MARKER_BLOCK: &str = "\
final Fun<String> function = new Fun<String>() {
    public String get(Object itIs, int times)// =>\x20
    {
        String string = itIs.toString();
        return string.toLowerCase();
    }
};";

pub const BOTH_MARKERS: &str = "\
Runnable r = new Runnable() {
    public void run()/* => */{ go(); // =>\x20
    }
};";

pub const NO_MARKER: &str = "\
Runnable r = new Runnable() {
    public void run() { go(); }
};";

/// A small compilation unit with every kind of fold.
pub const DEMO_UNIT: &str = "\
/*
 * Copyright header.
 */
package demo;

import java.util.concurrent.Callable;
import java.util.concurrent.Executors;

/**
 * Demo.
 */
public class Demo {

    /**
     * Submits work.
     */
    void submit() {
        Executors.newCachedThreadPool().submit(new Callable<Integer>() {
            public Integer call()/* => */{
                return 1 + 4 + 2;
            }
        });
    }

    static class Inner {
        int x;
    }
}
";
